use core::fmt;

/// The input could not be turned into a [`Value`](crate::Value).
///
/// Every construction failure is reported the same way: the input is either malformed JSON,
/// not valid UTF-8, or a native value of an unsupported type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParseError;

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("input is not a supported JSON-like value")
    }
}

impl std::error::Error for ParseError {}
