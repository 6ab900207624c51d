//! Base64 encoding and decoding in three dialects.
//!
//! This crate provides:
//! - Standard base64 with padding
//! - URL-safe base64 with padding
//! - URL-safe base64 without padding
//!
//! Decoders check the input against the dialect's character set before
//! decoding and cut the decoded bytes at the first null byte, reporting
//! whether that happened in [`DecodeResult::had_embedded_terminator`].
//!
//! # Example
//!
//! ```
//! use base64_dialects::{decode_url_nopad, encode_url_nopad};
//!
//! let encoded = encode_url_nopad("hello world");
//! assert_eq!(encoded, "aGVsbG8gd29ybGQ");
//!
//! let decoded = decode_url_nopad(&encoded).unwrap();
//! assert_eq!(decoded.value(), b"hello world");
//! assert!(!decoded.had_embedded_terminator());
//! ```

mod constants;
mod decode;
mod decode_result;
mod dialect;
mod encode;
mod padding;
mod terminator;
mod validate;

pub use constants::{ALPHABET, ALPHABET_URL, PAD, TERMINATOR};
pub use decode::{decode_standard, decode_url, decode_url_nopad};
pub use decode_result::DecodeResult;
pub use dialect::{Dialect, UnknownDialect};
pub use encode::{encode_standard, encode_url, encode_url_nopad};
pub use padding::{minimal_padding, pad_url_nopad};
pub use terminator::truncate_at_terminator;
pub use validate::validate;

use thiserror::Error;

/// Error type for base64 decoding.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Base64Error {
    /// The input could not be validated or decoded in the requested dialect.
    #[error("invalid base64 encoding")]
    InvalidEncoding,
}
