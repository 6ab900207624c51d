//! Null-terminator post-processing of decoded bytes.

use crate::constants::TERMINATOR;
use crate::DecodeResult;

/// Cuts `decoded` at its first null byte.
///
/// # Example
///
/// ```
/// use base64_dialects::truncate_at_terminator;
///
/// let result = truncate_at_terminator(b"abc\0def".to_vec());
/// assert_eq!(result.value(), b"abc");
/// assert!(result.had_embedded_terminator());
///
/// let result = truncate_at_terminator(b"abc".to_vec());
/// assert_eq!(result.value(), b"abc");
/// assert!(!result.had_embedded_terminator());
/// ```
pub fn truncate_at_terminator(mut decoded: Vec<u8>) -> DecodeResult {
    match decoded.iter().position(|&byte| byte == TERMINATOR) {
        Some(offset) => {
            log::debug!(
                "decoded output truncated at offset {offset} of {}",
                decoded.len()
            );
            decoded.truncate(offset);
            DecodeResult::new(decoded, true)
        }
        None => DecodeResult::new(decoded, false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_terminator_yields_empty_value() {
        let result = truncate_at_terminator(vec![0, 1, 2]);
        assert!(result.value().is_empty());
        assert!(result.had_embedded_terminator());
    }

    #[test]
    fn trailing_terminator() {
        let result = truncate_at_terminator(b"abc\0".to_vec());
        assert_eq!(result.value(), b"abc");
        assert!(result.had_embedded_terminator());
    }

    #[test]
    fn only_first_terminator_counts() {
        let result = truncate_at_terminator(b"a\0b\0c".to_vec());
        assert_eq!(result.value(), b"a");
        assert!(result.had_embedded_terminator());
    }

    #[test]
    fn empty_input() {
        assert_eq!(truncate_at_terminator(Vec::new()), DecodeResult::default());
    }
}
