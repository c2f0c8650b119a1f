//! Text tokenizing and numeric parsing helpers.

use crate::ParseError;

/// Count the whitespace-delimited words in a line.
///
/// A word is a maximal run of characters that are not space, CR or LF.
/// Leading, trailing and collapsed whitespace add nothing. Callers use this
/// as a presence check before argument extraction and should only rely on
/// the 0/1/at-least-2 distinction.
pub fn count_words(text: &str) -> usize {
    text.split(|c| matches!(c, ' ' | '\r' | '\n'))
        .filter(|word| !word.is_empty())
        .count()
}

/// Parse an unsigned 32-bit value from text in base 10 or 16.
///
/// Base-16 input may optionally start with `0x` or `0X`. Every remaining
/// character must be a valid digit for the base; the first invalid one fails
/// the whole parse and no partial value is returned.
///
/// Accumulation wraps on overflow (`value * base + digit` in 32 bits);
/// overflow is deliberately not detected, and the narrower wrappers truncate
/// to their width.
pub fn parse_u32(text: &str, base: u32) -> Result<u32, ParseError> {
    if base != 10 && base != 16 {
        return Err(ParseError::UnsupportedBase(base));
    }

    let digits = if base == 16 {
        text.strip_prefix("0x")
            .or_else(|| text.strip_prefix("0X"))
            .unwrap_or(text)
    } else {
        text
    };

    if digits.is_empty() {
        return Err(ParseError::TooShort);
    }

    let mut value: u32 = 0;
    for c in digits.chars() {
        let digit = c.to_digit(base).ok_or(ParseError::InvalidDigit(c))?;
        value = value.wrapping_mul(base).wrapping_add(digit);
    }

    Ok(value)
}

/// Parse an unsigned 16-bit value. Wraps to the low 16 bits on overflow.
pub fn parse_u16(text: &str, base: u32) -> Result<u16, ParseError> {
    parse_u32(text, base).map(|v| v as u16)
}

/// Parse an unsigned 8-bit value. Wraps to the low 8 bits on overflow.
pub fn parse_u8(text: &str, base: u32) -> Result<u8, ParseError> {
    parse_u32(text, base).map(|v| v as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_words() {
        assert_eq!(count_words(""), 0);
        assert_eq!(count_words("a"), 1);
        assert_eq!(count_words("a b"), 2);
        assert_eq!(count_words("a  b"), 2);
        assert_eq!(count_words("a b "), 2);
        assert_eq!(count_words("a\r\nb c"), 3);
        assert_eq!(count_words("   "), 0);
    }

    #[test]
    fn test_parse_hex() {
        assert_eq!(parse_u16("0x10EF", 16), Ok(0x10EF));
        assert_eq!(parse_u16("10EF", 16), Ok(0x10EF));
        assert_eq!(parse_u16("0X10ef", 16), Ok(0x10EF));
    }

    #[test]
    fn test_parse_decimal() {
        assert_eq!(parse_u32("12345", 10), Ok(12345));
        assert_eq!(parse_u8("200", 10), Ok(200));
    }

    #[test]
    fn test_parse_invalid_digit() {
        assert_eq!(parse_u16("0xZZ", 16), Err(ParseError::InvalidDigit('Z')));
        assert_eq!(parse_u32("12a", 10), Err(ParseError::InvalidDigit('a')));
    }

    #[test]
    fn test_parse_too_short() {
        assert_eq!(parse_u8("", 10), Err(ParseError::TooShort));
        assert_eq!(parse_u16("", 16), Err(ParseError::TooShort));
        assert_eq!(parse_u16("0x", 16), Err(ParseError::TooShort));
    }

    #[test]
    fn test_parse_unsupported_base() {
        assert_eq!(parse_u32("777", 8), Err(ParseError::UnsupportedBase(8)));
    }

    #[test]
    fn test_parse_wraps_on_overflow() {
        // 0x12345 wraps to the low 16 bits when parsed as u16.
        assert_eq!(parse_u16("0x12345", 16), Ok(0x2345));
    }
}
