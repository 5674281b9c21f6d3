use core::fmt;

/// Everything that can go wrong while reading a digit literal.
///
/// Each variant names the parser stage that rejected the input, in the
/// order the stages run: prefix, then bracketed value, then base suffix.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// The input was empty, or too short to hold any literal.
    EmptyOrNull,
    /// The input does not start with `d[`, `d#`, `dig[` or `dig#`.
    InvalidPrefix,
    /// A non-decimal character appeared inside the value.
    InvalidDigit,
    /// The value was empty, as in `d[]B10`.
    NoDigits,
    /// The input ended before the closing `]` or `#`.
    MissingDelimiter,
    /// The `B` introducing the base suffix is absent.
    MissingB,
    /// A non-decimal character appeared in (or after) the base.
    InvalidBaseDigit,
    /// Nothing followed the `B`.
    NoBaseDigits,
    /// The literal's base differs from the digit's radix.
    BaseMismatch,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ParseError::EmptyOrNull => "empty input",
            ParseError::InvalidPrefix => "expected d[, d#, dig[ or dig# prefix",
            ParseError::InvalidDigit => "invalid character in value",
            ParseError::NoDigits => "no digits in value",
            ParseError::MissingDelimiter => "unterminated value",
            ParseError::MissingB => "missing B before base",
            ParseError::InvalidBaseDigit => "invalid character in base",
            ParseError::NoBaseDigits => "no digits in base",
            ParseError::BaseMismatch => "literal base differs from digit radix",
        })
    }
}

/// [`ParseError`] or success.
pub type Result<T> = core::result::Result<T, ParseError>;
