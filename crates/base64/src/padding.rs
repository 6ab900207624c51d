//! Padding normalization for the unpadded URL-safe dialect.

use std::borrow::Cow;

/// Returns the shortest run of `=` that brings a base64 string of length
/// `len` to a multiple of 4.
///
/// A remainder of 1 can never come out of an encoder, so nothing is appended
/// and the transform is left to reject the input.
pub fn minimal_padding(len: usize) -> &'static str {
    match len % 4 {
        2 => "==",
        3 => "=",
        _ => "",
    }
}

/// Appends [`minimal_padding`] to `input`, borrowing when nothing is needed.
///
/// # Example
///
/// ```
/// use base64_dialects::pad_url_nopad;
///
/// assert_eq!(&*pad_url_nopad(b"YWJjZA"), b"YWJjZA==");
/// assert_eq!(&*pad_url_nopad(b"aGVsbG8"), b"aGVsbG8=");
/// assert_eq!(&*pad_url_nopad(b"Zm9v"), b"Zm9v");
/// ```
pub fn pad_url_nopad(input: &[u8]) -> Cow<'_, [u8]> {
    match minimal_padding(input.len()) {
        "" => Cow::Borrowed(input),
        padding => {
            let mut padded = Vec::with_capacity(input.len() + padding.len());
            padded.extend_from_slice(input);
            padded.extend_from_slice(padding.as_bytes());
            Cow::Owned(padded)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padding_by_remainder() {
        assert_eq!(minimal_padding(0), "");
        assert_eq!(minimal_padding(1), "");
        assert_eq!(minimal_padding(2), "==");
        assert_eq!(minimal_padding(3), "=");
        assert_eq!(minimal_padding(4), "");
        assert_eq!(minimal_padding(5), "");
        assert_eq!(minimal_padding(6), "==");
        assert_eq!(minimal_padding(7), "=");
    }

    #[test]
    fn borrows_when_aligned() {
        for input in [&b"Zm9v"[..], &b"Zm9vY"[..], &b""[..]] {
            let padded = pad_url_nopad(input);
            assert!(matches!(padded, Cow::Borrowed(_)));
            assert_eq!(&*padded, input);
        }
    }

    #[test]
    fn owns_when_padded() {
        let padded = pad_url_nopad(b"Zg");
        assert!(matches!(padded, Cow::Owned(_)));
        assert_eq!(&*padded, b"Zg==");
    }
}
