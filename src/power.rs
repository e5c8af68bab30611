//! Power-of-two detection for transform lengths.

/// Returns `k` such that `n == 2^k`.
///
/// Zero and lengths that are not a power of two also return `0`, the same
/// value a one-sample buffer gets. Use [`checked_power`] when the two cases
/// must be told apart.
pub const fn compute_power(n: usize) -> u32 {
    let mut power = 0;
    if n != 0 && n & (n - 1) == 0 {
        let mut p = n;
        while p & 1 == 0 && p > 1 {
            p >>= 1;
            power += 1;
        }
    }
    power
}

/// Returns `Some(k)` with `n == 2^k`, or `None` for zero and non-powers of two.
pub const fn checked_power(n: usize) -> Option<u32> {
    if n != 0 && n & (n - 1) == 0 {
        Some(compute_power(n))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_powers() {
        for k in 0..=20u32 {
            assert_eq!(compute_power(1 << k), k);
            assert_eq!(checked_power(1 << k), Some(k));
        }
    }

    #[test]
    fn sentinel_for_zero_and_non_powers() {
        assert_eq!(compute_power(0), 0);
        for n in [3, 6, 100, 65000, usize::MAX] {
            assert_eq!(compute_power(n), 0, "n = {n}");
            assert_eq!(checked_power(n), None, "n = {n}");
        }
        assert_eq!(checked_power(0), None);
    }

    #[test]
    fn one_is_ambiguous_only_without_checking() {
        assert_eq!(compute_power(1), compute_power(3));
        assert_ne!(checked_power(1), checked_power(3));
    }

    #[test]
    fn usable_in_const_context() {
        const STAGES: u32 = compute_power(4096);
        assert_eq!(STAGES, 12);
    }
}
