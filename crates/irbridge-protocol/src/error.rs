//! Error types for the command protocol.

use thiserror::Error;

/// Errors that can occur when parsing a numeric token.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// The input was empty, or a `0x` prefix had no digits after it.
    #[error("input too short")]
    TooShort,

    /// A character was not a valid digit for the requested base.
    #[error("invalid digit: {0:?}")]
    InvalidDigit(char),

    /// Only bases 10 and 16 are supported.
    #[error("unsupported base: {0}")]
    UnsupportedBase(u32),
}

/// Why a `/send` invocation could not be turned into a code.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SendCodeError {
    /// No argument followed the command token.
    #[error("missing code argument")]
    MissingArgument,

    /// The argument was not a valid 16-bit hex code.
    #[error("invalid code argument")]
    InvalidCode,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert!(ParseError::InvalidDigit('Z').to_string().contains("'Z'"));
        assert!(ParseError::UnsupportedBase(7).to_string().contains('7'));
        assert_eq!(
            SendCodeError::MissingArgument.to_string(),
            "missing code argument"
        );
    }
}
