//! Sizing parameters for sliding-window spectrum analysis.

use crate::window::WindowKind;

/// Analysis sizing.
///
/// `buffer_capacity` is the transform length used for the whole signal and
/// `window_size` the transform length of each frame. Both must be powers of
/// two; signals shorter than either are zero-padded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalysisConfig {
    /// Samples per analysis frame.
    pub window_size: usize,
    /// Maximum number of input samples analyzed. Extra samples are dropped.
    pub total_samples: usize,
    /// Transform length for the full-signal spectrum.
    pub buffer_capacity: usize,
    /// Sampling rate in Hz.
    pub sampling_rate: f64,
    /// Taper applied to each frame.
    pub window: WindowKind,
}

impl Default for AnalysisConfig {
    /// 6.5 s recordings at 10 kHz analysed in ~0.4 s frames.
    fn default() -> Self {
        Self {
            window_size: 4096,
            total_samples: 65000,
            buffer_capacity: 65536,
            sampling_rate: 10_000.0,
            window: WindowKind::Rectangular,
        }
    }
}

impl AnalysisConfig {
    /// Short captures at 3 kHz: 2048-sample frames, 4096-point full transform.
    pub fn short_signal(total_samples: usize) -> Self {
        Self {
            window_size: 2048,
            total_samples,
            buffer_capacity: 4096,
            sampling_rate: 3000.0,
            window: WindowKind::Rectangular,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window_size < 2 || !self.window_size.is_power_of_two() {
            return Err(ConfigError::WindowSize(self.window_size));
        }
        if self.buffer_capacity < 2 || !self.buffer_capacity.is_power_of_two() {
            return Err(ConfigError::BufferCapacity(self.buffer_capacity));
        }
        if self.window_size > self.buffer_capacity {
            return Err(ConfigError::WindowExceedsBuffer {
                window_size: self.window_size,
                buffer_capacity: self.buffer_capacity,
            });
        }
        if self.total_samples == 0 || self.total_samples > self.buffer_capacity {
            return Err(ConfigError::TotalSamples {
                total_samples: self.total_samples,
                buffer_capacity: self.buffer_capacity,
            });
        }
        if !self.sampling_rate.is_finite() || self.sampling_rate <= 0.0 {
            return Err(ConfigError::SamplingRate(self.sampling_rate));
        }
        Ok(())
    }

    /// Hz between adjacent bins of the full-signal spectrum.
    pub fn full_frequency_step(&self) -> f64 {
        (self.sampling_rate / 2.0) / (self.buffer_capacity / 2) as f64
    }

    /// Hz between adjacent bins of a frame spectrum.
    pub fn window_frequency_step(&self) -> f64 {
        (self.sampling_rate / 2.0) / (self.window_size / 2) as f64
    }

    /// Frames needed to cover `samples` input values.
    pub fn window_count(&self, samples: usize) -> usize {
        samples.min(self.total_samples).div_ceil(self.window_size)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    WindowSize(usize),
    BufferCapacity(usize),
    WindowExceedsBuffer {
        window_size: usize,
        buffer_capacity: usize,
    },
    TotalSamples {
        total_samples: usize,
        buffer_capacity: usize,
    },
    SamplingRate(f64),
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::WindowSize(n) => {
                write!(f, "window size {n} must be a power of two of at least 2")
            }
            ConfigError::BufferCapacity(n) => {
                write!(f, "buffer capacity {n} must be a power of two of at least 2")
            }
            ConfigError::WindowExceedsBuffer {
                window_size,
                buffer_capacity,
            } => write!(
                f,
                "window size {window_size} exceeds buffer capacity {buffer_capacity}"
            ),
            ConfigError::TotalSamples {
                total_samples,
                buffer_capacity,
            } => write!(
                f,
                "total samples {total_samples} must be in 1..={buffer_capacity}"
            ),
            ConfigError::SamplingRate(rate) => {
                write!(f, "sampling rate {rate} must be positive and finite")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}
