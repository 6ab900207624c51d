//! Encoders. Any byte sequence is encodable, so none of these fail.

use base64::Engine;

use crate::dialect::{STANDARD, URL_SAFE, URL_SAFE_NO_PAD};

/// Encodes `input` with the standard alphabet and `=` padding.
///
/// # Example
///
/// ```
/// use base64_dialects::encode_standard;
///
/// assert_eq!(encode_standard("hello world"), "aGVsbG8gd29ybGQ=");
/// assert_eq!(encode_standard([0xfb, 0xff]), "+/8=");
/// ```
pub fn encode_standard(input: impl AsRef<[u8]>) -> String {
    STANDARD.encode(input)
}

/// Encodes `input` with the URL-safe alphabet and `=` padding.
///
/// # Example
///
/// ```
/// use base64_dialects::encode_url;
///
/// assert_eq!(encode_url([0xfb, 0xff]), "-_8=");
/// ```
pub fn encode_url(input: impl AsRef<[u8]>) -> String {
    URL_SAFE.encode(input)
}

/// Encodes `input` with the URL-safe alphabet and no padding.
///
/// # Example
///
/// ```
/// use base64_dialects::encode_url_nopad;
///
/// assert_eq!(encode_url_nopad("hello world"), "aGVsbG8gd29ybGQ");
/// assert_eq!(encode_url_nopad([0xfb, 0xff]), "-_8");
/// ```
pub fn encode_url_nopad(input: impl AsRef<[u8]>) -> String {
    URL_SAFE_NO_PAD.encode(input)
}
