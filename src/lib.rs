#![cfg_attr(not(test), no_std)]
//! Modular arithmetic digits over an arbitrary compile-time radix.
//!
//! A [`Digit<B>`][Digit] is an element of $\mathbb{Z}/B\mathbb{Z}$ for any
//! radix $1 < B \leq 2^{32}$, stored canonically reduced. The usual
//! operators act modularly and never overflow, [`sum_carry`][Digit::sum_carry]
//! and [`carrying_mul`][Digit::carrying_mul] expose the carries that
//! multi-digit arithmetic needs, and literals of the shape `d[5]B10`
//! round-trip through [`Display`][core::fmt::Display] and `str::parse`.

#[cfg(feature = "log")]
#[macro_use]
extern crate delog;
#[cfg(feature = "log")]
generate_macros!();

mod digit;
pub use digit::{Digit, One, Zero};
mod error;
pub use error::{ParseError, Result};
pub mod math;
mod parse;
pub use parse::DigitStr;
mod word;
pub use word::{storage_bits, DoubleWord, Promote, SignedDoubleWord, Word};

/// The largest supported radix, $2^{32}$.
pub const MAX_BASE: u64 = 1 << 32;

/// The binary digit.
pub type Bit = Digit<2>;
/// The everyday decimal digit.
pub type DecimalDigit = Digit<10>;
/// The octet, base 256.
pub type ByteDigit = Digit<256>;
