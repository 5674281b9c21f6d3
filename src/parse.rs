//! Reading and writing digit literals.
//!
//! The accepted grammar is `d[N]BM`, `d#N#BM`, `dig[N]BM` and `dig#N#BM`,
//! where `N` is the decimal value and `M` the decimal radix. Three little
//! state machines run in sequence (prefix, value, base), each reporting
//! its own [`ParseError`] variant, and a final check compares the
//! literal's radix against the digit's.

use core::fmt;
use core::str::FromStr;

use zeroize::Zeroize;

use crate::error::{ParseError, Result};
use crate::Digit;

/// Consumes `d[`, `d#`, `dig[` or `dig#`.
///
/// Returns the index of the first value character and the closing
/// delimiter the value stage must find (`]` or `#`).
const fn parse_prefix(s: &[u8]) -> Result<(usize, u8)> {
    // 4 bytes is the floor for the short form, 6 for the long one
    if s.len() < 4 {
        return Err(ParseError::EmptyOrNull);
    }
    if s[0] == b'd' {
        match s[1] {
            b'[' => return Ok((2, b']')),
            b'#' => return Ok((2, b'#')),
            _ => {}
        }
        if s.len() >= 6 && s[1] == b'i' && s[2] == b'g' {
            match s[3] {
                b'[' => return Ok((4, b']')),
                b'#' => return Ok((4, b'#')),
                _ => {}
            }
        }
    }
    Err(ParseError::InvalidPrefix)
}

/// Consumes decimal digits up to (and including) the closing delimiter.
///
/// Accumulation saturates, so absurdly long literals stay well-defined;
/// the constructor reduces modulo the radix either way.
const fn parse_value(s: &[u8], start: usize, closing: u8) -> Result<(usize, u64)> {
    let mut i = start;
    let mut value = 0u64;
    while i < s.len() {
        let c = s[i];
        if c == closing {
            if i == start {
                return Err(ParseError::NoDigits);
            }
            return Ok((i + 1, value));
        }
        if !c.is_ascii_digit() {
            return Err(ParseError::InvalidDigit);
        }
        value = value.saturating_mul(10).saturating_add((c - b'0') as u64);
        i += 1;
    }
    Err(ParseError::MissingDelimiter)
}

/// Consumes `B` and the decimal radix, which must run to the end of the
/// input: trailing junk is rejected as [`ParseError::InvalidBaseDigit`],
/// a non-digit right after the `B` as [`ParseError::NoBaseDigits`].
const fn parse_base(s: &[u8], start: usize) -> Result<u64> {
    if start >= s.len() || s[start] != b'B' {
        return Err(ParseError::MissingB);
    }
    let mut i = start + 1;
    let mut base = 0u64;
    let mut digits = 0;
    while i < s.len() {
        let c = s[i];
        if !c.is_ascii_digit() {
            return Err(if digits == 0 {
                ParseError::NoBaseDigits
            } else {
                ParseError::InvalidBaseDigit
            });
        }
        base = base.saturating_mul(10).saturating_add((c - b'0') as u64);
        digits += 1;
        i += 1;
    }
    if digits == 0 {
        return Err(ParseError::NoBaseDigits);
    }
    Ok(base)
}

impl<const B: u64> Digit<B> {
    /// Parses a digit literal, usable in const context.
    ///
    /// ```
    /// use radix_digit::Digit;
    ///
    /// const FIVE: Digit<10> = match Digit::from_bytes(b"d[5]B10") {
    ///     Ok(digit) => digit,
    ///     Err(_) => Digit::ZERO,
    /// };
    /// assert_eq!(FIVE, Digit::new(5));
    /// ```
    pub const fn from_bytes(s: &[u8]) -> Result<Self> {
        let (i, closing) = match parse_prefix(s) {
            Ok(prefix) => prefix,
            Err(e) => return Err(e),
        };
        let (i, value) = match parse_value(s, i, closing) {
            Ok(value) => value,
            Err(e) => return Err(e),
        };
        let base = match parse_base(s, i) {
            Ok(base) => base,
            Err(e) => return Err(e),
        };
        if base != B {
            return Err(ParseError::BaseMismatch);
        }
        Ok(Self::new(value))
    }

    /// The forgiving constructor: any unparseable literal is ZERO.
    pub fn from_str_or_zero(s: &str) -> Self {
        match Self::from_bytes(s.as_bytes()) {
            Ok(digit) => digit,
            Err(_error) => {
                #[cfg(feature = "log")]
                debug!("discarding digit literal: {}", _error);
                Self::ZERO
            }
        }
    }

    /// The canonical literal `d[value]Bbase`, rendered to the stack.
    pub const fn to_buf(&self) -> DigitStr {
        let mut buf = [0u8; DigitStr::CAPACITY];
        buf[0] = b'd';
        buf[1] = b'[';
        let (buf, len) = push_decimal(buf, 2, self.get() as u64);
        let mut buf = buf;
        buf[len] = b']';
        buf[len + 1] = b'B';
        let (buf, len) = push_decimal(buf, len + 2, B);
        DigitStr { buf, len }
    }
}

/// Appends the decimal rendering of `value` at `len`.
///
/// The buffer is threaded by value: `&mut` parameters are off-limits in
/// `const fn` on older compilers.
const fn push_decimal(
    mut buf: [u8; DigitStr::CAPACITY],
    mut len: usize,
    mut value: u64,
) -> ([u8; DigitStr::CAPACITY], usize) {
    let mut digits = [0u8; 10];
    let mut n = 0;
    loop {
        digits[n] = b'0' + (value % 10) as u8;
        value /= 10;
        n += 1;
        if value == 0 {
            break;
        }
    }
    while n > 0 {
        n -= 1;
        buf[len] = digits[n];
        len += 1;
    }
    (buf, len)
}

impl<const B: u64> FromStr for Digit<B> {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_bytes(s.as_bytes())
    }
}

impl<const B: u64> fmt::Display for Digit<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "d[{}]B{}", self.get(), B)
    }
}

impl<const B: u64> fmt::Debug for Digit<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// A digit literal rendered into a fixed buffer, no allocator needed.
///
/// 32 bytes always suffice: value and radix have at most ten decimal
/// digits each, plus six bytes of punctuation.
#[derive(Clone, Zeroize)]
pub struct DigitStr {
    buf: [u8; Self::CAPACITY],
    len: usize,
}

impl DigitStr {
    const CAPACITY: usize = 32;

    pub fn as_str(&self) -> &str {
        // only ASCII is ever written
        core::str::from_utf8(&self.buf[..self.len]).unwrap_or("")
    }
}

impl AsRef<str> for DigitStr {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for DigitStr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for DigitStr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
