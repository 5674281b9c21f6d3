//! Integer utilities backing the ring queries on [`Digit`][crate::Digit].
//!
//! Everything here is a `const fn`: the same code answers at compile time
//! (e.g. deciding whether a radix is prime) and at runtime.

mod primes;
mod root;

pub use primes::is_prime;
pub use root::{ceil_sqrt, floor_sqrt, is_perfect_square};

/// Greatest common divisor, by Euclid's algorithm.
///
/// `gcd(0, 0) == 0` by the usual convention.
pub const fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// $a \cdot b \pmod m$ without overflow, via a `u128` product.
///
/// Panics in debug if `m == 0`, like the `%` it wraps.
pub const fn mul_mod(a: u64, b: u64, m: u64) -> u64 {
    ((a as u128 * b as u128) % m as u128) as u64
}

/// $b^e \pmod m$ by binary exponentiation.
pub const fn pow_mod(mut base: u64, mut exponent: u64, modulus: u64) -> u64 {
    if modulus == 1 {
        return 0;
    }
    let mut acc = 1u64;
    base %= modulus;
    while exponent > 0 {
        if exponent & 1 == 1 {
            acc = mul_mod(acc, base, modulus);
        }
        base = mul_mod(base, base, modulus);
        exponent >>= 1;
    }
    acc
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn gcd_basics() {
        assert_eq!(gcd(0, 0), 0);
        assert_eq!(gcd(0, 7), 7);
        assert_eq!(gcd(12, 18), 6);
        assert_eq!(gcd(17, 10), 1);
        assert_eq!(gcd(u64::MAX, u64::MAX - 1), 1);
    }

    #[test]
    fn mul_mod_does_not_overflow() {
        let a = u64::MAX - 1;
        let b = u64::MAX - 2;
        // GP/PARI: lift(Mod(2^64 - 2, 2^64 - 59) * (2^64 - 3))
        assert_eq!(mul_mod(a, b, u64::MAX - 58), 3192);
        assert_eq!(mul_mod(a, b, 2), 0);
    }

    #[test]
    fn pow_mod_small() {
        assert_eq!(pow_mod(2, 10, 1000), 24);
        assert_eq!(pow_mod(3, 0, 7), 1);
        assert_eq!(pow_mod(0, 0, 7), 1);
        assert_eq!(pow_mod(5, 3, 1), 0);
        // Fermat: a^(p-1) = 1 mod p
        assert_eq!(pow_mod(1234, 65_536, 65_537), 1);
    }

    #[test]
    fn const_evaluable() {
        const G: u64 = gcd(48, 36);
        const P: u64 = pow_mod(7, 5, 13);
        assert_eq!(G, 12);
        assert_eq!(P, 11);
    }
}
