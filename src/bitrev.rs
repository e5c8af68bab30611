//! Decimation-in-time input reordering.
//!
//! The reversed index is tracked incrementally instead of being recomputed
//! bit by bit: `j` holds the reversal of `i`, and `k` walks down from `N/2`
//! clearing the carry bits the increment of `i` produced in reversed order.

use crate::num::Float;

/// Reorder `real` into bit-reversed index order and zero `imag`.
///
/// Runs for any length. When `real.len()` is not a power of two the
/// resulting order is not a bit reversal, but every swap stays in bounds and
/// the call always terminates. Both slices must have the same length; the
/// transform driver checks this before calling.
pub fn permute<T: Float>(real: &mut [T], imag: &mut [T]) {
    debug_assert_eq!(real.len(), imag.len());
    let n = real.len();
    let half = n >> 1;
    let mut j = 0usize;
    for i in 0..n.saturating_sub(1) {
        if i < j {
            real.swap(i, j);
        }
        let mut k = half;
        // k reaches zero only on non-power-of-two lengths
        while k != 0 && k <= j {
            j -= k;
            k >>= 1;
        }
        j += k;
    }
    imag.fill(T::zero());
}

/// Bit-reversed position of `i` over `bits` bits.
///
/// Reference form of the index mapping [`permute`] applies incrementally.
pub const fn reverse_index(i: usize, bits: u32) -> usize {
    if bits == 0 {
        return 0;
    }
    i.reverse_bits() >> (usize::BITS - bits)
}
