//! The digit type itself: a residue class modulo a compile-time radix.

use core::cmp::Ordering;
use core::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Not, Rem, RemAssign, Sub, SubAssign,
};

use zeroize::Zeroize;

use crate::math;
use crate::word::{DoubleWord, SignedDoubleWord, Word};

/// A digit modulo `B`, i.e. an element of $\mathbb{Z}/B\mathbb{Z}$
/// in canonical representation `0..B`.
///
/// `B` may be anything in $1 < B \leq 2^{32}$; outside that range the
/// type fails to compile. All constructors normalize, so a stored value
/// is always a canonical representative, and all arithmetic is modular:
///
/// ```
/// use radix_digit::Digit;
///
/// let a = Digit::<10>::new(23);
/// assert_eq!(a, Digit::new(3));
/// assert_eq!(a + Digit::new(9), Digit::new(2));
/// ```
///
/// For fixed `B` this is a ring; if `B` is prime, a field
/// (cf. [`Self::IS_PRIME_BASE`]).
#[derive(Clone, Copy, Default, Eq, Ord, PartialEq, PartialOrd, Zeroize)]
pub struct Digit<const B: u64>(Word);

impl<const B: u64> Digit<B> {
    const BASE_VALID: () = assert!(B > 1 && B <= 1u64 << 32, "radix must lie in 2..=2^32");

    /// The radix.
    pub const BASE: u64 = B;
    /// Bit width of the narrowest storage able to hold every residue.
    pub const STORAGE_BITS: u32 = crate::word::storage_bits(B);
    /// Whether the ring is a field, i.e. every nonzero digit a unit.
    pub const IS_PRIME_BASE: bool = math::is_prime(B);

    pub const ZERO: Self = Self::new(0);
    pub const ONE: Self = Self::new(1);
    /// The largest digit, $B - 1$.
    pub const MAX: Self = Self::new(B - 1);
    /// The second-largest digit, $B - 2$ (coincides with ZERO when `B = 2`).
    pub const SUBMAX: Self = Self::new(B - 2);

    /// Two residues can be added within [`Word`] iff `B <= 2^31`.
    const DIRECT_SUM: bool = B <= 1u64 << 31;
    /// Two residues can be multiplied within [`Word`] iff `B <= 2^16`.
    const DIRECT_PRODUCT: bool = B <= 1u64 << 16;

    /// The digit congruent to `value`.
    pub const fn new(value: u64) -> Self {
        let _ = Self::BASE_VALID;
        Self((value % B) as Word)
    }

    /// The digit congruent to `value`, by Euclidean reduction:
    /// `from_signed(-7)` is `3` modulo ten, never a negative residue.
    pub const fn from_signed(value: i64) -> Self {
        let _ = Self::BASE_VALID;
        let b = B as i128;
        Self((((value as i128 % b) + b) % b) as Word)
    }

    /// The canonical representative.
    pub const fn get(&self) -> Word {
        self.0
    }

    /// Modular addition.
    ///
    /// For small enough radices the sum stays within [`Word`] and one
    /// conditional subtraction reduces it; otherwise the widened
    /// [`DoubleWord`] sum is reduced by `%`.
    pub const fn add_mod(self, other: Self) -> Self {
        if Self::DIRECT_SUM {
            let sum = self.0 + other.0;
            Self(if sum as u64 >= B { sum - B as Word } else { sum })
        } else {
            Self(((self.0 as DoubleWord + other.0 as DoubleWord) % B) as Word)
        }
    }

    /// Modular subtraction, via the signed widened word.
    pub const fn sub_mod(self, other: Self) -> Self {
        let diff = self.0 as SignedDoubleWord - other.0 as SignedDoubleWord;
        Self(if diff < 0 {
            (diff + B as SignedDoubleWord) as Word
        } else {
            diff as Word
        })
    }

    /// Modular multiplication.
    pub const fn mul_mod(self, other: Self) -> Self {
        if Self::DIRECT_PRODUCT {
            Self(self.0 * other.0 % B as Word)
        } else {
            Self((self.0 as DoubleWord * other.0 as DoubleWord % B) as Word)
        }
    }

    /// Division as multiplication by the inverse.
    ///
    /// When the divisor is not a unit (which includes zero) there is
    /// nothing to multiply by, and the dividend is returned unchanged.
    pub const fn div_mod(self, other: Self) -> Self {
        let inverse = other.mult_inv();
        if inverse.0 == 0 {
            self
        } else {
            self.mul_mod(inverse)
        }
    }

    /// Remainder of the canonical representatives.
    ///
    /// Unrelated to the ring structure, but occasionally useful.
    /// A zero divisor leaves the dividend unchanged.
    pub const fn rem_mod(self, other: Self) -> Self {
        if other.0 == 0 {
            self
        } else {
            Self(self.0 % other.0)
        }
    }

    /// The additive inverse, $B - x$ (zero is its own inverse).
    pub const fn neg_mod(self) -> Self {
        if self.0 == 0 {
            self
        } else {
            Self((B - self.0 as u64) as Word)
        }
    }

    /// The complement to the largest digit, $B - 1 - x$.
    pub const fn complement(self) -> Self {
        Self((B - 1 - self.0 as u64) as Word)
    }

    /// Modular exponentiation by squaring.
    ///
    /// Exponent zero gives ONE, including $0^0 = 1$; zero and one are
    /// fixed by every positive exponent.
    pub const fn pow(self, exponent: u64) -> Self {
        if exponent == 0 {
            return Self::ONE;
        }
        if self.0 <= 1 {
            return self;
        }
        match exponent {
            1 => self,
            2 => self.mul_mod(self),
            _ => {
                let mut base = self;
                let mut exp = exponent;
                let mut acc = Self::ONE;
                while exp > 0 {
                    if exp & 1 == 1 {
                        acc = acc.mul_mod(base);
                    }
                    base = base.mul_mod(base);
                    exp >>= 1;
                }
                acc
            }
        }
    }

    /// Circular increment: MAX wraps to ZERO.
    pub fn incr(&mut self) {
        *self = if self.is_max() {
            Self::ZERO
        } else {
            Self(self.0 + 1)
        };
    }

    /// Circular decrement: ZERO wraps to MAX.
    pub fn decr(&mut self) {
        *self = if self.0 == 0 {
            Self::MAX
        } else {
            Self(self.0 - 1)
        };
    }

    /// The carry of `self + other`: ONE iff the sum reaches `B`.
    ///
    /// The raw sum is never materialized. Both summands on the same side
    /// of `B/2` decide the carry outright (splitting on the parity of
    /// `B`, whose halves are uneven when odd); only the mixed case needs
    /// the boundary comparison against the distance to `B`.
    ///
    /// The reduced sum itself is [`add_mod`][Self::add_mod].
    pub const fn sum_carry(self, other: Self) -> Self {
        let a = self.0 as u64;
        let b = other.0 as u64;
        let low = B / 2;
        let high = B / 2 + B % 2;
        if (a < low && b < high) || (a < high && b < low) {
            Self::ZERO
        } else if (a >= low && b >= high) || (a >= high && b >= low) {
            Self::ONE
        } else if a >= B - b {
            Self::ONE
        } else {
            Self::ZERO
        }
    }

    /// Full multiplication: `(carry, digit)` where
    /// `self * other = carry * B + digit`. The carry is itself a valid
    /// digit, since $(B-1)^2 = (B-2) \cdot B + 1$.
    pub const fn carrying_mul(self, other: Self) -> (Self, Self) {
        let product = self.0 as DoubleWord * other.0 as DoubleWord;
        (Self((product / B) as Word), Self((product % B) as Word))
    }

    /// Whether the digit is invertible, i.e. coprime to the radix.
    ///
    /// In a prime-radix field every nonzero digit is a unit.
    pub const fn is_unit(&self) -> bool {
        if self.0 == 0 {
            return false;
        }
        if self.0 == 1 || Self::IS_PRIME_BASE {
            return true;
        }
        math::gcd(self.0 as u64, B) == 1
    }

    /// Whether the digit is a zero divisor.
    ///
    /// Zero always is ($0 \cdot b = 0$ for every $b$); a nonzero digit
    /// is a zero divisor exactly when it is not a unit, so in a
    /// prime-radix field zero is the only one.
    pub const fn is_zero_divisor(&self) -> bool {
        self.0 == 0 || !self.is_unit()
    }

    /// The multiplicative inverse, or ZERO when the digit is not a unit.
    ///
    /// Extended Euclid: the final Bézout coefficient of the value,
    /// Euclidean-reduced, is the inverse whenever the final remainder
    /// (the gcd) is one.
    pub const fn mult_inv(self) -> Self {
        // 1 and B-1 are always their own inverse
        if self.is_one() || self.is_max() {
            return self;
        }
        let (mut old_r, mut r) = (self.0 as SignedDoubleWord, B as SignedDoubleWord);
        let (mut old_s, mut s) = (1 as SignedDoubleWord, 0);
        while r != 0 {
            let quotient = old_r / r;
            let next_r = old_r - quotient * r;
            old_r = r;
            r = next_r;
            let next_s = old_s - quotient * s;
            old_s = s;
            s = next_s;
        }
        if old_r != 1 {
            return Self::ZERO;
        }
        Self::from_signed(old_s)
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_one(&self) -> bool {
        self.0 == 1
    }

    pub const fn is_zero_or_one(&self) -> bool {
        self.0 <= 1
    }

    pub const fn is_max(&self) -> bool {
        self.0 as u64 == B - 1
    }

    pub const fn is_submax(&self) -> bool {
        self.0 as u64 == (B - 2) % B
    }

    /// At one of the two ends of the range.
    pub const fn is_max_or_min(&self) -> bool {
        self.is_zero() || self.is_max()
    }

    /// Within one of either end of the range.
    pub const fn is_near_max_or_min(&self) -> bool {
        self.is_zero_or_one() || self.is_max() || self.is_submax()
    }

    pub const fn is_far_from_max_or_min(&self) -> bool {
        !self.is_near_max_or_min()
    }
}

pub trait One: Sized + PartialEq {
    fn one() -> Self;

    fn is_one(&self) -> bool {
        *self == Self::one()
    }
    fn set_one(&mut self) {
        *self = Self::one();
    }
}

pub trait Zero: Sized + PartialEq {
    fn zero() -> Self;

    fn is_zero(&self) -> bool {
        *self == Self::zero()
    }
    fn set_zero(&mut self) {
        *self = Self::zero();
    }
}

impl<const B: u64> One for Digit<B> {
    fn one() -> Self {
        Self::ONE
    }
}

impl<const B: u64> Zero for Digit<B> {
    fn zero() -> Self {
        Self::ZERO
    }
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => { $(
        impl<const B: u64> From<$t> for Digit<B> {
            fn from(value: $t) -> Self {
                Self::new(value as u64)
            }
        }
    )* }
}

macro_rules! impl_from_signed {
    ($($t:ty),*) => { $(
        impl<const B: u64> From<$t> for Digit<B> {
            fn from(value: $t) -> Self {
                Self::from_signed(value as i64)
            }
        }
    )* }
}

impl_from_unsigned!(u8, u16, u32, u64, usize);
impl_from_signed!(i8, i16, i32, i64, isize);

// Ring operators, delegating to the const methods.

impl<const B: u64> Add for Digit<B> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        self.add_mod(other)
    }
}

impl<const B: u64> AddAssign for Digit<B> {
    fn add_assign(&mut self, other: Self) {
        *self = self.add_mod(other);
    }
}

impl<const B: u64> Sub for Digit<B> {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        self.sub_mod(other)
    }
}

impl<const B: u64> SubAssign for Digit<B> {
    fn sub_assign(&mut self, other: Self) {
        *self = self.sub_mod(other);
    }
}

impl<const B: u64> Mul for Digit<B> {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        self.mul_mod(other)
    }
}

impl<const B: u64> MulAssign for Digit<B> {
    fn mul_assign(&mut self, other: Self) {
        *self = self.mul_mod(other);
    }
}

impl<const B: u64> Div for Digit<B> {
    type Output = Self;

    /// See [`Digit::div_mod`]: a non-unit divisor is a no-op.
    fn div(self, other: Self) -> Self {
        self.div_mod(other)
    }
}

impl<const B: u64> DivAssign for Digit<B> {
    fn div_assign(&mut self, other: Self) {
        *self = self.div_mod(other);
    }
}

impl<const B: u64> Rem for Digit<B> {
    type Output = Self;

    /// See [`Digit::rem_mod`]: a zero divisor is a no-op.
    fn rem(self, other: Self) -> Self {
        self.rem_mod(other)
    }
}

impl<const B: u64> RemAssign for Digit<B> {
    fn rem_assign(&mut self, other: Self) {
        *self = self.rem_mod(other);
    }
}

impl<const B: u64> Neg for Digit<B> {
    type Output = Self;

    /// The additive inverse, cf. [`Digit::neg_mod`].
    fn neg(self) -> Self {
        self.neg_mod()
    }
}

impl<const B: u64> Not for Digit<B> {
    type Output = Self;

    /// The complement to MAX, cf. [`Digit::complement`].
    fn not(self) -> Self {
        self.complement()
    }
}

// Mixed arithmetic: unsigned integers reduce first, then operate.

macro_rules! impl_mixed_ops {
    ($(($op:ident, $method:ident, $op_assign:ident, $method_assign:ident, $delegate:ident)),*) => { $(
        impl<const B: u64> $op<u64> for Digit<B> {
            type Output = Self;

            fn $method(self, other: u64) -> Self {
                self.$delegate(Self::new(other))
            }
        }

        impl<const B: u64> $op_assign<u64> for Digit<B> {
            fn $method_assign(&mut self, other: u64) {
                *self = self.$delegate(Self::new(other));
            }
        }
    )* }
}

impl_mixed_ops!(
    (Add, add, AddAssign, add_assign, add_mod),
    (Sub, sub, SubAssign, sub_assign, sub_mod),
    (Mul, mul, MulAssign, mul_assign, mul_mod)
);

// Comparisons against plain integers reduce the integer first, so they
// order residue classes, not representatives.

impl<const B: u64> PartialEq<u64> for Digit<B> {
    fn eq(&self, other: &u64) -> bool {
        *self == Self::new(*other)
    }
}

impl<const B: u64> PartialOrd<u64> for Digit<B> {
    fn partial_cmp(&self, other: &u64) -> Option<Ordering> {
        self.partial_cmp(&Self::new(*other))
    }
}

impl<const B: u64> PartialEq<i64> for Digit<B> {
    fn eq(&self, other: &i64) -> bool {
        *self == Self::from_signed(*other)
    }
}

impl<const B: u64> PartialOrd<i64> for Digit<B> {
    fn partial_cmp(&self, other: &i64) -> Option<Ordering> {
        self.partial_cmp(&Self::from_signed(*other))
    }
}
