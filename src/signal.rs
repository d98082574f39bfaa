//! Signal parameter model and the shared sampling grid.

use std::f64::consts::PI;

/// Number of samples in every plotted waveform.
pub const GRID_SAMPLES: usize = 1000;

/// Number of harmonics carried by a Fourier parameter set.
pub const HARMONICS: usize = 9;

/// A sampled waveform as (time, amplitude) pairs.
pub type Waveform = Vec<(f64, f64)>;

/// Amplitude, frequency and phase of one sinusoid.
#[derive(Clone, Copy, Debug)]
pub struct SinusoidParams {
    pub amplitude: f64,
    pub frequency: f64,
    pub phase: f64,
}

/// Fourier series parameters: DC term, fundamental, and the cosine/sine
/// coefficients of harmonics 1 through [`HARMONICS`]. The harmonic count is
/// fixed by the arrays; the parameter model has no provision for more.
#[derive(Clone, Debug)]
pub struct FourierParams {
    pub dc: f64,
    pub omega: f64,
    pub period: f64,
    pub cosine_coeffs: [f64; HARMONICS],
    pub sine_coeffs: [f64; HARMONICS],
}

/// Evenly spaced time samples over `[0, span]`, both endpoints included.
#[derive(Clone, Debug)]
pub struct TimeGrid {
    samples: Vec<f64>,
}

impl TimeGrid {
    /// A grid of [`GRID_SAMPLES`] points spanning `[0, span]`.
    pub fn over_span(span: f64) -> Self {
        let last = (GRID_SAMPLES - 1) as f64;
        TimeGrid {
            samples: (0..GRID_SAMPLES)
                .map(|i| span * (i as f64 / last))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().copied()
    }
}

/// Derive the period `T = 2π/ω0`. A zero ω0 has no period; the caller keeps
/// whatever value it already had.
pub fn period_from_omega(omega: f64) -> Option<f64> {
    if omega == 0.0 {
        None
    } else {
        Some(2.0 * PI / omega)
    }
}

/// Derive the angular frequency `ω0 = 2π/T`. A zero period has no
/// fundamental; the caller keeps whatever value it already had.
pub fn omega_from_period(period: f64) -> Option<f64> {
    if period == 0.0 {
        None
    } else {
        Some(2.0 * PI / period)
    }
}
