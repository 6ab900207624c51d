//! The three supported base64 dialects and their transforms.

use std::fmt;
use std::str::FromStr;

use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use thiserror::Error;

use crate::constants::PAD;
use crate::{decode, encode, Base64Error, DecodeResult};

const PADDED: GeneralPurposeConfig = GeneralPurposeConfig::new()
    .with_encode_padding(true)
    .with_decode_padding_mode(DecodePaddingMode::RequireCanonical)
    .with_decode_allow_trailing_bits(true);

const RAW: GeneralPurposeConfig = GeneralPurposeConfig::new()
    .with_encode_padding(false)
    .with_decode_padding_mode(DecodePaddingMode::RequireNone)
    .with_decode_allow_trailing_bits(true);

/// Standard alphabet, padded.
pub(crate) const STANDARD: GeneralPurpose = GeneralPurpose::new(&alphabet::STANDARD, PADDED);

/// URL-safe alphabet, padded.
pub(crate) const URL_SAFE: GeneralPurpose = GeneralPurpose::new(&alphabet::URL_SAFE, PADDED);

/// URL-safe alphabet, no padding on either side of the transform.
pub(crate) const URL_SAFE_NO_PAD: GeneralPurpose = GeneralPurpose::new(&alphabet::URL_SAFE, RAW);

/// Returned when parsing a dialect name other than `standard`, `url` or `url-nopad`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown base64 dialect: {0}")]
pub struct UnknownDialect(pub String);

/// A base64 alphabet together with its padding policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    /// `A-Z a-z 0-9 + /`, padded with `=`.
    Standard,
    /// `A-Z a-z 0-9 - _`, padded with `=`.
    UrlSafe,
    /// `A-Z a-z 0-9 - _`, no padding allowed.
    UrlSafeNoPad,
}

impl Dialect {
    /// Every supported dialect.
    pub const ALL: [Dialect; 3] = [Dialect::Standard, Dialect::UrlSafe, Dialect::UrlSafeNoPad];

    /// Short name used by `Display` and `FromStr`.
    pub fn name(self) -> &'static str {
        match self {
            Dialect::Standard => "standard",
            Dialect::UrlSafe => "url",
            Dialect::UrlSafeNoPad => "url-nopad",
        }
    }

    /// Returns `true` if `byte` may appear in an input of this dialect.
    ///
    /// # Example
    ///
    /// ```
    /// use base64_dialects::Dialect;
    ///
    /// assert!(Dialect::Standard.is_valid_byte(b'+'));
    /// assert!(!Dialect::UrlSafe.is_valid_byte(b'+'));
    /// assert!(Dialect::UrlSafe.is_valid_byte(b'='));
    /// assert!(!Dialect::UrlSafeNoPad.is_valid_byte(b'='));
    /// ```
    pub fn is_valid_byte(self, byte: u8) -> bool {
        if byte.is_ascii_alphanumeric() {
            return true;
        }
        match self {
            Dialect::Standard => matches!(byte, b'+' | b'/' | PAD),
            Dialect::UrlSafe => matches!(byte, b'-' | b'_' | PAD),
            Dialect::UrlSafeNoPad => matches!(byte, b'-' | b'_'),
        }
    }

    /// Encodes `input` in this dialect.
    pub fn encode(self, input: impl AsRef<[u8]>) -> String {
        match self {
            Dialect::Standard => encode::encode_standard(input),
            Dialect::UrlSafe => encode::encode_url(input),
            Dialect::UrlSafeNoPad => encode::encode_url_nopad(input),
        }
    }

    /// Decodes `input` in this dialect.
    ///
    /// # Example
    ///
    /// ```
    /// use base64_dialects::Dialect;
    ///
    /// let result = Dialect::UrlSafeNoPad.decode("aGVsbG8").unwrap();
    /// assert_eq!(result.value(), b"hello");
    /// assert!(!result.had_embedded_terminator());
    /// ```
    pub fn decode(self, input: impl AsRef<[u8]>) -> Result<DecodeResult, Base64Error> {
        match self {
            Dialect::Standard => decode::decode_standard(input),
            Dialect::UrlSafe => decode::decode_url(input),
            Dialect::UrlSafeNoPad => decode::decode_url_nopad(input),
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Dialect {
    type Err = UnknownDialect;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Dialect::ALL
            .into_iter()
            .find(|dialect| dialect.name() == s)
            .ok_or_else(|| UnknownDialect(s.to_string()))
    }
}
