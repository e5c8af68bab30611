//! Sliding-window and full-signal magnitude spectra.
//!
//! The signal is cut into consecutive non-overlapping frames of
//! `window_size` samples, the last one zero-padded, and each frame gets its
//! own transform. The whole signal is also zero-padded to
//! `buffer_capacity` and transformed once. Only the unique first half of
//! every spectrum is kept.

use alloc::vec;
use alloc::vec::Vec;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::config::{AnalysisConfig, ConfigError};
use crate::fft::{FftError, MagnitudeFft};
use crate::num::Float;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnalysisError {
    Config(ConfigError),
    Transform(FftError),
}

impl From<ConfigError> for AnalysisError {
    fn from(e: ConfigError) -> Self {
        AnalysisError::Config(e)
    }
}

impl From<FftError> for AnalysisError {
    fn from(e: FftError) -> Self {
        AnalysisError::Transform(e)
    }
}

impl core::fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            AnalysisError::Config(e) => write!(f, "invalid analysis config: {e}"),
            AnalysisError::Transform(e) => write!(f, "transform failed: {e}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for AnalysisError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AnalysisError::Config(e) => Some(e),
            AnalysisError::Transform(e) => Some(e),
        }
    }
}

/// Result of [`SpectrumAnalyzer::analyze`].
#[derive(Debug, Clone, PartialEq)]
pub struct SpectrumAnalysis<T> {
    /// `buffer_capacity / 2` bins of the zero-padded whole signal.
    pub full: Vec<T>,
    /// `window_size / 2` bins per frame, in temporal order.
    pub windows: Vec<Vec<T>>,
    /// Hz per bin of [`full`](Self::full).
    pub full_step: f64,
    /// Hz per bin of each frame spectrum.
    pub window_step: f64,
}

impl<T: Float> SpectrumAnalysis<T> {
    pub fn full_frequency(&self, bin: usize) -> f64 {
        self.full_step * bin as f64
    }

    pub fn window_frequency(&self, bin: usize) -> f64 {
        self.window_step * bin as f64
    }

    /// Bins per frame spectrum, `0` when the signal was empty.
    pub fn window_bins(&self) -> usize {
        self.windows.first().map_or(0, Vec::len)
    }

    /// Index of the largest full-signal bin, skipping DC.
    pub fn dominant_full_bin(&self) -> Option<usize> {
        peak_bin(&self.full)
    }
}

/// Index of the largest bin after DC.
pub fn peak_bin<T: Float>(spectrum: &[T]) -> Option<usize> {
    spectrum
        .iter()
        .enumerate()
        .skip(1)
        .fold(None, |best: Option<(usize, T)>, (i, &m)| match best {
            Some((_, b)) if b >= m => best,
            _ => Some((i, m)),
        })
        .map(|(i, _)| i)
}

/// Validated analysis pipeline.
#[derive(Debug, Clone, Copy)]
pub struct SpectrumAnalyzer {
    config: AnalysisConfig,
    fft: MagnitudeFft,
}

impl SpectrumAnalyzer {
    pub fn new(config: AnalysisConfig) -> Result<Self, AnalysisError> {
        Self::with_fft(config, MagnitudeFft::default())
    }

    pub fn with_fft(config: AnalysisConfig, fft: MagnitudeFft) -> Result<Self, AnalysisError> {
        config.validate()?;
        Ok(Self { config, fft })
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    pub fn analyze<T: Float>(&self, signal: &[T]) -> Result<SpectrumAnalysis<T>, AnalysisError> {
        let used = signal.len().min(self.config.total_samples);
        if used < signal.len() {
            verbose!(
                warn,
                "dropping {} samples beyond total_samples = {}",
                signal.len() - used,
                self.config.total_samples
            );
        }
        let samples = &signal[..used];
        verbose!(
            debug,
            "analyzing {} samples in {} windows of {}",
            used,
            self.config.window_count(used),
            self.config.window_size
        );

        let windows = self.frame_spectra(samples)?;
        let full = self.padded_spectrum(samples, self.config.buffer_capacity, false)?;
        Ok(SpectrumAnalysis {
            full,
            windows,
            full_step: self.config.full_frequency_step(),
            window_step: self.config.window_frequency_step(),
        })
    }

    #[cfg(not(feature = "parallel"))]
    fn frame_spectra<T: Float>(&self, samples: &[T]) -> Result<Vec<Vec<T>>, FftError> {
        samples
            .chunks(self.config.window_size)
            .map(|frame| self.padded_spectrum(frame, self.config.window_size, true))
            .collect()
    }

    #[cfg(feature = "parallel")]
    fn frame_spectra<T: Float>(&self, samples: &[T]) -> Result<Vec<Vec<T>>, FftError> {
        samples
            .par_chunks(self.config.window_size)
            .map(|frame| self.padded_spectrum(frame, self.config.window_size, true))
            .collect()
    }

    /// Magnitude spectrum of `samples` zero-padded to `len`, first `len / 2` bins.
    fn padded_spectrum<T: Float>(
        &self,
        samples: &[T],
        len: usize,
        taper: bool,
    ) -> Result<Vec<T>, FftError> {
        let mut buffer = vec![T::zero(); 2 * len];
        buffer[..samples.len()].copy_from_slice(samples);
        if taper {
            self.config.window.apply(&mut buffer[..len]);
        }
        self.fft.process_packed(&mut buffer, len)?;
        buffer.truncate(len / 2);
        Ok(buffer)
    }
}

/// [`SpectrumAnalyzer::analyze`] with the default transform.
pub fn analyze<T: Float>(
    signal: &[T],
    config: &AnalysisConfig,
) -> Result<SpectrumAnalysis<T>, AnalysisError> {
    SpectrumAnalyzer::new(*config)?.analyze(signal)
}
