//! In-place radix-2 butterfly network.
//!
//! Expects input already in bit-reversed order (see [`crate::bitrev`]) and
//! produces the unnormalized DFT of the complex sequence `real + i*imag`.

use crate::num::{Complex, Float};

/// How each stage obtains its angular step `exp(-i*pi/l1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TwiddleMode {
    /// Derive every stage's step from the previous one with the half-angle
    /// formulas, starting from `(-1, 0)`. No trigonometric calls, with
    /// rounding error that grows with the stage count.
    #[default]
    Recurrence,
    /// Evaluate `sin_cos(-pi / l1)` once per stage.
    Direct,
}

/// Per-stage twiddle step generator.
///
/// The recurrence state is carried in `f64` whatever the sample type. In
/// `f32` the cosine reaches exactly `1.0` around stage 14, after which the
/// remaining stages would stop rotating.
#[derive(Debug, Clone, Copy)]
struct StageStep {
    mode: TwiddleMode,
    c1: f64,
    c2: f64,
}

impl StageStep {
    fn new(mode: TwiddleMode) -> Self {
        Self {
            mode,
            c1: -1.0,
            c2: 0.0,
        }
    }

    fn current<T: Float>(&self, l1: usize) -> Complex<T> {
        match self.mode {
            TwiddleMode::Recurrence => Complex::new(T::from_f64(self.c1), T::from_f64(self.c2)),
            TwiddleMode::Direct => {
                let angle = -T::pi() / T::from_usize(l1);
                let (s, c) = angle.sin_cos();
                Complex::new(c, s)
            }
        }
    }

    fn advance(&mut self) {
        if self.mode == TwiddleMode::Recurrence {
            self.c2 = -libm::sqrt((1.0 - self.c1) / 2.0);
            self.c1 = libm::sqrt((1.0 + self.c1) / 2.0);
        }
    }
}

/// Run `p2` butterfly stages over `real`/`imag`.
///
/// `p2` must be `log2(real.len())`; with `p2 == 0` this is a no-op. Both
/// slices must have the same length.
pub fn transform<T: Float>(real: &mut [T], imag: &mut [T], p2: u32, mode: TwiddleMode) {
    debug_assert_eq!(real.len(), imag.len());
    debug_assert!(p2 == 0 || real.len() == 1usize << p2);
    let n = real.len();
    let mut steps = StageStep::new(mode);
    let mut l2 = 1usize;
    for _ in 0..p2 {
        let l1 = l2;
        l2 <<= 1;
        let step = steps.current::<T>(l1);
        let mut u = Complex::<T>::one();
        for j in 0..l1 {
            for i in (j..n).step_by(l2) {
                let i1 = i + l1;
                let t1 = u.re * real[i1] - u.im * imag[i1];
                let t2 = u.re * imag[i1] + u.im * real[i1];
                real[i1] = real[i] - t1;
                imag[i1] = imag[i] - t2;
                real[i] += t1;
                imag[i] += t2;
            }
            u = u.mul(step);
        }
        steps.advance();
    }
}
