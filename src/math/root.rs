/// $\lfloor\sqrt{n}\rfloor$ by Newton-Raphson on integers.
///
/// The seed $2^{\lceil\text{bits}(n)/2\rceil}$ is at least the root, and
/// the iteration decreases monotonically from above, so the first
/// non-decreasing step is the answer.
pub const fn floor_sqrt(n: u64) -> u64 {
    if n < 2 {
        return n;
    }
    let bits = 64 - n.leading_zeros();
    let mut x = 1u64 << ((bits + 1) / 2);
    loop {
        let next = (x + n / x) / 2;
        if next >= x {
            return x;
        }
        x = next;
    }
}

/// $\lceil\sqrt{n}\rceil$.
pub const fn ceil_sqrt(n: u64) -> u64 {
    let root = floor_sqrt(n);
    if root * root == n {
        root
    } else {
        root + 1
    }
}

pub const fn is_perfect_square(n: u64) -> bool {
    let root = floor_sqrt(n);
    root * root == n
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn exact_squares() {
        for root in [0u64, 1, 2, 3, 10, 255, 256, 65_535, 4_294_967_295] {
            let n = root * root;
            assert_eq!(floor_sqrt(n), root);
            assert_eq!(ceil_sqrt(n), root);
            assert!(is_perfect_square(n));
        }
    }

    #[test]
    fn between_squares() {
        assert_eq!(floor_sqrt(2), 1);
        assert_eq!(ceil_sqrt(2), 2);
        assert_eq!(floor_sqrt(99), 9);
        assert_eq!(ceil_sqrt(99), 10);
        assert_eq!(floor_sqrt(101), 10);
        assert_eq!(ceil_sqrt(101), 11);
        assert!(!is_perfect_square(2));
        assert!(!is_perfect_square(99));
    }

    #[test]
    fn extremes() {
        assert_eq!(floor_sqrt(u64::MAX), 4_294_967_295);
        assert_eq!(ceil_sqrt(u64::MAX), 4_294_967_296);
        assert_eq!(floor_sqrt(u64::MAX - 1), 4_294_967_295);
    }

    #[test]
    fn const_evaluable() {
        const R: u64 = floor_sqrt(1 << 32);
        assert_eq!(R, 65_536);
    }

    #[cfg(feature = "extended-testing")]
    #[test]
    fn first_million_agree_with_float() {
        for n in 0..1_000_000u64 {
            assert_eq!(floor_sqrt(n), (n as f64).sqrt() as u64, "n = {}", n);
        }
    }
}
