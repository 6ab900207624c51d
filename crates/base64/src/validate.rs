//! Alphabet pre-validation.

use crate::{Base64Error, Dialect};

/// Checks that every byte of `input` belongs to `dialect`'s character set.
///
/// The scan stops at the first disallowed byte. An empty input is valid.
///
/// # Errors
///
/// Returns [`Base64Error::InvalidEncoding`] if any byte is outside the set.
///
/// # Example
///
/// ```
/// use base64_dialects::{validate, Dialect};
///
/// validate("aGVsbG8=", Dialect::Standard).unwrap();
/// validate("aGVsbG8=", Dialect::UrlSafeNoPad).unwrap_err();
/// validate("QU&|*#()JDRA==", Dialect::Standard).unwrap_err();
/// ```
pub fn validate(input: impl AsRef<[u8]>, dialect: Dialect) -> Result<(), Base64Error> {
    match input
        .as_ref()
        .iter()
        .position(|&byte| !dialect.is_valid_byte(byte))
    {
        None => Ok(()),
        Some(offset) => {
            log::trace!("{dialect}: byte at offset {offset} is outside the alphabet");
            Err(Base64Error::InvalidEncoding)
        }
    }
}
