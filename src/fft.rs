//! Magnitude-spectrum FFT driver.
//!
//! Sequences the stages of a decimation-in-time radix-2 transform:
//! [`permute`](crate::bitrev::permute) always, the butterfly network only
//! when the length is a power of two greater than one, and
//! [`normalize`](crate::magnitude::normalize) always. On return the real
//! buffer holds `|X[k]| / N`.
//!
//! ```
//! use radix2_spectrum::fft::transform_magnitude;
//!
//! // 4 real samples followed by 4 scratch slots
//! let mut buffer = [1.0f32, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0];
//! transform_magnitude(&mut buffer, 4).unwrap();
//! assert!(buffer[..4].iter().all(|&m| (m - 0.25).abs() < 1e-6));
//! ```

use alloc::vec;
use alloc::vec::Vec;

use crate::bitrev::permute;
use crate::butterfly::{transform, TwiddleMode};
use crate::magnitude::normalize;
use crate::num::Float;
use crate::power::compute_power;

/// Errors reported by the transform entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FftError {
    /// Zero-length input.
    EmptyInput,
    /// Real and imaginary buffers differ in length.
    MismatchedLengths,
    /// Packed buffer cannot hold `n` real values plus `n` scratch values.
    InsufficientScratch { required: usize, actual: usize },
    /// Length is not a power of two and the policy is [`LengthPolicy::Reject`].
    NonPowerOfTwo { len: usize },
}

impl core::fmt::Display for FftError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FftError::EmptyInput => write!(f, "input buffer is empty"),
            FftError::MismatchedLengths => {
                write!(f, "real and imaginary buffers have different lengths")
            }
            FftError::InsufficientScratch { required, actual } => write!(
                f,
                "buffer holds {actual} values but {required} are needed for samples and scratch"
            ),
            FftError::NonPowerOfTwo { len } => write!(f, "length {len} is not a power of two"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FftError {}

/// Handling of lengths that are not a power of two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LengthPolicy {
    /// Permute and normalize without any butterfly stage. The output is the
    /// reordered input scaled by `1/N` and made non-negative, not a spectrum.
    #[default]
    PassThrough,
    /// Fail with [`FftError::NonPowerOfTwo`] before touching the buffers.
    Reject,
}

/// Stateless transform configuration.
///
/// The default uses the half-angle twiddle recurrence and passes
/// non-power-of-two lengths through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MagnitudeFft {
    pub twiddles: TwiddleMode,
    pub lengths: LengthPolicy,
}

impl MagnitudeFft {
    pub const fn new(twiddles: TwiddleMode, lengths: LengthPolicy) -> Self {
        Self { twiddles, lengths }
    }

    /// Strict variant: direct twiddles, power-of-two lengths only.
    pub const fn strict() -> Self {
        Self::new(TwiddleMode::Direct, LengthPolicy::Reject)
    }

    /// Overwrite `real` with its magnitude spectrum, using `imag` as scratch.
    ///
    /// `imag` may hold arbitrary values on entry; its contents afterwards are
    /// unspecified.
    pub fn process_split<T: Float>(&self, real: &mut [T], imag: &mut [T]) -> Result<(), FftError> {
        let n = real.len();
        if n == 0 {
            return Err(FftError::EmptyInput);
        }
        if imag.len() != n {
            return Err(FftError::MismatchedLengths);
        }
        let p2 = compute_power(n);
        if !n.is_power_of_two() && self.lengths == LengthPolicy::Reject {
            return Err(FftError::NonPowerOfTwo { len: n });
        }
        verbose!(trace, "magnitude fft: n = {}, stages = {}, {:?}", n, p2, self.twiddles);

        permute(real, imag);
        if p2 > 0 {
            transform(real, imag, p2, self.twiddles);
        }
        normalize(real, imag);
        Ok(())
    }

    /// Packed form: `buffer[..n]` holds the samples, `buffer[n..2n]` is scratch.
    ///
    /// Slots past `2n` are left untouched. The length check happens before
    /// any write.
    pub fn process_packed<T: Float>(&self, buffer: &mut [T], n: usize) -> Result<(), FftError> {
        if n == 0 {
            return Err(FftError::EmptyInput);
        }
        let required = n.checked_mul(2).ok_or(FftError::InsufficientScratch {
            required: usize::MAX,
            actual: buffer.len(),
        })?;
        if buffer.len() < required {
            return Err(FftError::InsufficientScratch {
                required,
                actual: buffer.len(),
            });
        }
        let (real, rest) = buffer.split_at_mut(n);
        self.process_split(real, &mut rest[..n])
    }

    /// Allocating form returning all `signal.len()` magnitude bins.
    pub fn process_vec<T: Float>(&self, signal: &[T]) -> Result<Vec<T>, FftError> {
        let mut real = signal.to_vec();
        let mut imag = vec![T::zero(); signal.len()];
        self.process_split(&mut real, &mut imag)?;
        Ok(real)
    }
}

/// [`MagnitudeFft::process_packed`] with the default configuration.
pub fn transform_magnitude<T: Float>(buffer: &mut [T], n: usize) -> Result<(), FftError> {
    MagnitudeFft::default().process_packed(buffer, n)
}

/// [`MagnitudeFft::process_split`] with the default configuration.
pub fn magnitude_spectrum_split<T: Float>(real: &mut [T], imag: &mut [T]) -> Result<(), FftError> {
    MagnitudeFft::default().process_split(real, imag)
}

/// [`MagnitudeFft::process_vec`] with the default configuration.
pub fn magnitude_spectrum_vec<T: Float>(signal: &[T]) -> Result<Vec<T>, FftError> {
    MagnitudeFft::default().process_vec(signal)
}
