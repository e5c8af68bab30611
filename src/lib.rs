//! # radix2-spectrum
//!
//! Magnitude spectra of real-valued sampled signals with an iterative
//! radix-2 Cooley-Tukey FFT: bit-reversal permutation, in-place butterfly
//! stages driven by a half-angle twiddle recurrence, and `1/N` magnitude
//! normalization. The transform works in place on caller-owned buffers and
//! never allocates.
//!
//! On top of the core, [`analysis`] slices a signal into fixed-size frames
//! and computes per-frame and whole-signal spectra from an
//! [`AnalysisConfig`].
//!
//! ## Cargo Features
//!
//! - `std` (default): `std::error::Error` for the error types
//! - `parallel`: compute frame spectra on the Rayon thread pool
//! - `verbose-logging`: emit `log` records from the transform and analysis
//!
//! ## Example
//!
//! ```
//! use radix2_spectrum::{magnitude_spectrum_vec, analysis::peak_bin};
//!
//! let n = 256;
//! let signal: Vec<f64> = (0..n)
//!     .map(|i| (2.0 * std::f64::consts::PI * 16.0 * i as f64 / n as f64).cos())
//!     .collect();
//! let spectrum = magnitude_spectrum_vec(&signal).unwrap();
//! assert_eq!(peak_bin(&spectrum[..n / 2]), Some(16));
//! ```
//!
//! ## License
//!
//! Licensed under either of
//! - Apache License, Version 2.0 (https://www.apache.org/licenses/LICENSE-2.0)
//! - MIT license (https://opensource.org/licenses/MIT)
//!
//! at your option.

#![cfg_attr(not(feature = "std"), no_std)]
extern crate alloc;

/// Forwards to the `log` crate when `verbose-logging` is enabled.
macro_rules! verbose {
    ($level:ident, $($arg:tt)+) => {{
        #[cfg(feature = "verbose-logging")]
        {
            log::$level!($($arg)+);
        }
    }};
}

pub mod num;

/// Power-of-two checks for transform lengths.
pub mod power;

/// Bit-reversal reordering ahead of the butterfly stages.
pub mod bitrev;

/// Radix-2 butterfly stages and twiddle-factor generation.
pub mod butterfly;

/// `1/N` scaling and magnitude reduction.
pub mod magnitude;

pub mod fft;

/// Frame taper windows.
pub mod window;

/// Analysis sizing and validation.
pub mod config;

pub mod analysis;

pub use analysis::{SpectrumAnalysis, SpectrumAnalyzer};
pub use butterfly::TwiddleMode;
pub use config::AnalysisConfig;
pub use fft::{
    magnitude_spectrum_split, magnitude_spectrum_vec, transform_magnitude, FftError,
    LengthPolicy, MagnitudeFft,
};
pub use num::Float;
pub use power::{checked_power, compute_power};
