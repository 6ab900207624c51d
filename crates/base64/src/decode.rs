//! Decoders.
//!
//! Every decoder runs the same steps: an empty input short-circuits to an
//! empty result, the input is checked against the dialect's alphabet, the
//! strict transform runs, and the decoded bytes are cut at the first null
//! byte.

use base64::engine::GeneralPurpose;
use base64::Engine;

use crate::dialect::{STANDARD, URL_SAFE, URL_SAFE_NO_PAD};
use crate::{
    pad_url_nopad, truncate_at_terminator, validate, Base64Error, DecodeResult, Dialect,
};

fn transform(
    engine: &GeneralPurpose,
    dialect: Dialect,
    input: &[u8],
) -> Result<Vec<u8>, Base64Error> {
    engine.decode(input).map_err(|err| {
        log::trace!("{dialect}: transform rejected input: {err}");
        Base64Error::InvalidEncoding
    })
}

fn decode_padded(
    engine: &GeneralPurpose,
    dialect: Dialect,
    input: &[u8],
) -> Result<DecodeResult, Base64Error> {
    if input.is_empty() {
        return Ok(DecodeResult::default());
    }
    validate(input, dialect)?;
    let decoded = transform(engine, dialect, input)?;
    Ok(truncate_at_terminator(decoded))
}

/// Decodes a standard, padded base64 string.
///
/// # Errors
///
/// Returns [`Base64Error::InvalidEncoding`] if the input contains a byte
/// outside `A-Z a-z 0-9 + / =` or is not well-formed padded base64.
///
/// # Example
///
/// ```
/// use base64_dialects::decode_standard;
///
/// let result = decode_standard("aGVsbG8=").unwrap();
/// assert_eq!(result.value(), b"hello");
/// assert!(!result.had_embedded_terminator());
///
/// let result = decode_standard("YWJjAGRlZg==").unwrap();
/// assert_eq!(result.value(), b"abc");
/// assert!(result.had_embedded_terminator());
///
/// decode_standard("aGVsbG8=0").unwrap_err();
/// ```
pub fn decode_standard(input: impl AsRef<[u8]>) -> Result<DecodeResult, Base64Error> {
    decode_padded(&STANDARD, Dialect::Standard, input.as_ref())
}

/// Decodes a URL-safe, padded base64 string.
///
/// # Errors
///
/// Returns [`Base64Error::InvalidEncoding`] if the input contains a byte
/// outside `A-Z a-z 0-9 - _ =` or is not well-formed padded base64.
///
/// # Example
///
/// ```
/// use base64_dialects::decode_url;
///
/// assert_eq!(decode_url("-_8=").unwrap().value(), [0xfb, 0xff]);
/// decode_url("+/8=").unwrap_err();
/// ```
pub fn decode_url(input: impl AsRef<[u8]>) -> Result<DecodeResult, Base64Error> {
    decode_padded(&URL_SAFE, Dialect::UrlSafe, input.as_ref())
}

/// Decodes a URL-safe base64 string that carries no padding.
///
/// The input is first padded to a multiple of 4 and handed to the raw
/// transform. If that is rejected, the original input is tried as is. Both
/// attempts go through the same transform.
///
/// # Errors
///
/// Returns [`Base64Error::InvalidEncoding`] if the input contains a byte
/// outside `A-Z a-z 0-9 - _` (including `=`) or neither form decodes.
///
/// # Example
///
/// ```
/// use base64_dialects::decode_url_nopad;
///
/// assert_eq!(decode_url_nopad("YWJjZA").unwrap().value(), b"abcd");
/// assert_eq!(decode_url_nopad("aGVsbG8").unwrap().value(), b"hello");
/// decode_url_nopad("YWJjZA==").unwrap_err();
/// ```
pub fn decode_url_nopad(input: impl AsRef<[u8]>) -> Result<DecodeResult, Base64Error> {
    let input = input.as_ref();
    let dialect = Dialect::UrlSafeNoPad;
    if input.is_empty() {
        return Ok(DecodeResult::default());
    }
    validate(input, dialect)?;

    let padded = pad_url_nopad(input);
    if let Ok(decoded) = transform(&URL_SAFE_NO_PAD, dialect, &padded) {
        return Ok(truncate_at_terminator(decoded));
    }
    log::trace!("{dialect}: retrying without normalized padding");
    let decoded = transform(&URL_SAFE_NO_PAD, dialect, input)?;
    Ok(truncate_at_terminator(decoded))
}
