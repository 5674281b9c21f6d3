use super::{mul_mod, pow_mod};

/// Numbers below this bound are answered by sieve lookup,
/// everything above by Miller-Rabin.
const SIEVE_BOUND: u64 = 65_537;

/// Bit `n / 2` marks the odd number `n` as composite.
///
/// A compile-time sieve of Eratosthenes over the odd numbers below
/// [`SIEVE_BOUND`], bit-packed into 4 KiB.
const ODD_COMPOSITE: [u32; 1024] = {
    let mut sieve = [0u32; 1024];
    sieve[0] |= 1; // 1 is not prime
    let mut p = 3u64;
    while p * p < SIEVE_BOUND {
        if sieve[(p / 2 / 32) as usize] >> (p / 2 % 32) & 1 == 0 {
            let mut multiple = p * p;
            while multiple < SIEVE_BOUND {
                let bit = multiple / 2;
                sieve[(bit / 32) as usize] |= 1 << (bit % 32);
                multiple += 2 * p;
            }
        }
        p += 2;
    }
    sieve
};

/// The first 25 primes, a (more than) sufficient witness set:
/// the first 12 already decide primality for every `u64`.
///
/// Cf. <https://miller-rabin.appspot.com/> and
/// [Deterministic variants of the Miller-Rabin primality test
/// (Jaeschke, 1993)](https://doi.org/10.1090/S0025-5718-1993-1192971-8).
const WITNESSES: [u64; 25] = [
    2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89, 97,
];

/// Deterministic primality test over the full `u64` range.
pub const fn is_prime(n: u64) -> bool {
    if n == 2 {
        return true;
    }
    if n < 2 || n & 1 == 0 {
        return false;
    }
    if n < SIEVE_BOUND {
        let bit = n / 2;
        return ODD_COMPOSITE[(bit / 32) as usize] >> (bit % 32) & 1 == 0;
    }
    miller_rabin(n)
}

/// Strong-probable-prime test against every witness in [`WITNESSES`].
///
/// Callers guarantee `n` odd and `n > SIEVE_BOUND`, so all witnesses
/// are proper (nonzero modulo `n`).
const fn miller_rabin(n: u64) -> bool {
    // n - 1 = d * 2^s with d odd
    let mut d = n - 1;
    let mut s = 0u32;
    while d & 1 == 0 {
        d >>= 1;
        s += 1;
    }

    let mut i = 0;
    while i < WITNESSES.len() {
        let mut x = pow_mod(WITNESSES[i], d, n);
        if x != 1 && x != n - 1 {
            let mut r = 1;
            let mut witnessed = true;
            while r < s {
                x = mul_mod(x, x, n);
                if x == n - 1 {
                    witnessed = false;
                    break;
                }
                r += 1;
            }
            if witnessed {
                return false;
            }
        }
        i += 1;
    }
    true
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn small_numbers() {
        assert!(!is_prime(0));
        assert!(!is_prime(1));
        assert!(is_prime(2));
        assert!(is_prime(3));
        assert!(!is_prime(4));
        assert!(is_prime(5));
        assert!(!is_prime(9));
        assert!(is_prime(251));
        assert!(!is_prime(255));
    }

    #[test]
    fn around_the_sieve_bound() {
        assert!(is_prime(65_521)); // largest prime below 2^16
        assert!(!is_prime(65_535));
        assert!(!is_prime(65_536));
        assert!(is_prime(65_537)); // F4, first Miller-Rabin customer
        assert!(!is_prime(65_539 * 3));
    }

    #[test]
    fn carmichael_numbers_are_composite() {
        // Fermat pseudoprimes to many bases; classic sieve escapees
        assert!(!is_prime(561));
        assert!(!is_prime(41_041));
        assert!(!is_prime(825_265));
        assert!(!is_prime(321_197_185));
    }

    #[test]
    fn large_primes() {
        assert!(is_prime(2_147_483_647)); // 2^31 - 1, Mersenne
        assert!(is_prime(4_294_967_291)); // largest prime below 2^32
        assert!(!is_prime(4_294_967_295)); // 2^32 - 1 = 3 * 5 * 17 * 257 * 65537
        assert!(is_prime(18_446_744_073_709_551_557)); // largest u64 prime
        assert!(!is_prime(18_446_744_073_709_551_615));
    }

    #[test]
    fn const_evaluable() {
        const F4_IS_PRIME: bool = is_prime(65_537);
        assert!(F4_IS_PRIME);
    }

    #[cfg(feature = "extended-testing")]
    #[test]
    fn sieve_agrees_with_trial_division() {
        fn by_trial_division(n: u64) -> bool {
            if n < 2 {
                return false;
            }
            let mut d = 2;
            while d * d <= n {
                if n % d == 0 {
                    return false;
                }
                d += 1;
            }
            true
        }
        for n in 0..SIEVE_BOUND {
            assert_eq!(is_prime(n), by_trial_division(n), "n = {}", n);
        }
    }
}
