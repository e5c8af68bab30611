//! Taper windows applied to analysis frames before the transform.
//!
//! Windows are periodic (`2*pi*i/len`), the usual choice for spectral
//! analysis. [`WindowKind::Rectangular`] leaves the frame untouched.

use alloc::vec::Vec;

use crate::num::Float;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindowKind {
    #[default]
    Rectangular,
    Hann,
    Hamming,
    Blackman,
}

impl WindowKind {
    /// Window coefficient at index `i` of a `len`-point window.
    pub fn coefficient<T: Float>(self, i: usize, len: usize) -> T {
        if len <= 1 {
            return T::one();
        }
        let x = T::from_f64(2.0) * T::pi() * T::from_usize(i) / T::from_usize(len);
        match self {
            WindowKind::Rectangular => T::one(),
            WindowKind::Hann => T::from_f64(0.5) - T::from_f64(0.5) * x.cos(),
            WindowKind::Hamming => T::from_f64(0.54) - T::from_f64(0.46) * x.cos(),
            WindowKind::Blackman => {
                let x2 = x + x;
                T::from_f64(0.42) - T::from_f64(0.5) * x.cos() + T::from_f64(0.08) * x2.cos()
            }
        }
    }

    /// Coefficients for a `len`-point window.
    pub fn coefficients<T: Float>(self, len: usize) -> Vec<T> {
        (0..len).map(|i| self.coefficient(i, len)).collect()
    }

    /// Multiply `frame` by the window in place.
    pub fn apply<T: Float>(self, frame: &mut [T]) {
        if self == WindowKind::Rectangular {
            return;
        }
        let len = frame.len();
        for (i, x) in frame.iter_mut().enumerate() {
            *x = *x * self.coefficient(i, len);
        }
    }
}

impl core::str::FromStr for WindowKind {
    type Err = UnknownWindow;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        const NAMES: [(&str, WindowKind); 6] = [
            ("rectangular", WindowKind::Rectangular),
            ("rect", WindowKind::Rectangular),
            ("none", WindowKind::Rectangular),
            ("hann", WindowKind::Hann),
            ("hamming", WindowKind::Hamming),
            ("blackman", WindowKind::Blackman),
        ];
        NAMES
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(s))
            .map(|&(_, kind)| kind)
            .ok_or(UnknownWindow)
    }
}

/// Returned when a window name does not match any [`WindowKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownWindow;

impl core::fmt::Display for UnknownWindow {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "unknown window, expected rectangular, hann, hamming or blackman")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for UnknownWindow {}
