//! Final `1/N` scaling and complex-to-magnitude reduction.

use crate::num::{Complex, Float};

/// Scale both buffers by `1/N` and store `|real[i] + i*imag[i]|` in `real[i]`.
///
/// Only the first `N/2` bins are unique for real-valued input. `imag` keeps
/// the scaled imaginary parts.
pub fn normalize<T: Float>(real: &mut [T], imag: &mut [T]) {
    debug_assert_eq!(real.len(), imag.len());
    let scale = T::from_usize(real.len());
    for (re, im) in real.iter_mut().zip(imag.iter_mut()) {
        *im /= scale;
        *re = Complex::new(*re / scale, *im).norm();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scales_then_takes_magnitude() {
        let mut re = [6.0f64, -8.0, 0.0, 0.0];
        let mut im = [8.0f64, 0.0, -4.0, 0.0];
        normalize(&mut re, &mut im);
        assert_eq!(re, [2.5, 2.0, 1.0, 0.0]);
        assert_eq!(im, [2.0, 0.0, -1.0, 0.0]);
    }

    #[test]
    fn magnitudes_are_non_negative() {
        let mut re = [-3.0f32, -0.5];
        let mut im = [-4.0f32, 0.0];
        normalize(&mut re, &mut im);
        assert!(re.iter().all(|&m| m >= 0.0));
        assert!((re[0] - 2.5).abs() < 1e-6);
    }
}
