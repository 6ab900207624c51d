use std::borrow::Cow;
use std::str::Utf8Error;

/// Output of a successful decode.
///
/// `value` holds the decoded bytes up to, not including, the first null
/// byte. `had_embedded_terminator` tells whether such a byte was found.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct DecodeResult {
    value: Vec<u8>,
    had_embedded_terminator: bool,
}

impl DecodeResult {
    pub(crate) fn new(value: Vec<u8>, had_embedded_terminator: bool) -> Self {
        Self {
            value,
            had_embedded_terminator,
        }
    }

    /// Decoded bytes before the first null byte.
    pub fn value(&self) -> &[u8] {
        &self.value
    }

    /// Whether the decoded output contained a null byte.
    pub fn had_embedded_terminator(&self) -> bool {
        self.had_embedded_terminator
    }

    /// Consumes the result, returning the decoded bytes.
    pub fn into_value(self) -> Vec<u8> {
        self.value
    }

    /// Views the value as UTF-8 text.
    pub fn to_str(&self) -> Result<&str, Utf8Error> {
        std::str::from_utf8(&self.value)
    }

    pub fn to_string_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.value)
    }
}

impl AsRef<[u8]> for DecodeResult {
    fn as_ref(&self) -> &[u8] {
        &self.value
    }
}
