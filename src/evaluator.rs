//! Closed-form evaluation of the two plotted signal families.

use std::f64::consts::PI;

use crate::signal::{FourierParams, SinusoidParams, TimeGrid, Waveform, HARMONICS};

/// Waveforms produced from three sinusoid parameter triples.
#[derive(Clone, Debug)]
pub struct RegularSignalSet {
    pub sines: Vec<Waveform>,
    pub cosines: Vec<Waveform>,
    pub aggregate: Waveform,
}

/// Waveforms reconstructed from a Fourier parameter set.
#[derive(Clone, Debug)]
pub struct FourierSeriesSet {
    pub cosine_harmonics: Vec<Waveform>,
    pub sine_harmonics: Vec<Waveform>,
    pub aggregate: Waveform,
}

/// Sample the three sinusoids on `grid`. Every signal yields a sine waveform
/// `A·sin(2πft + θ)` and a cosine waveform `A·cos(2πft + θ)`; the aggregate
/// sums all six component waveforms at each sample, sines and cosines alike.
pub fn evaluate_regular(params: &[SinusoidParams; 3], grid: &TimeGrid) -> RegularSignalSet {
    let mut sines = Vec::with_capacity(params.len());
    let mut cosines = Vec::with_capacity(params.len());
    let mut aggregate: Waveform = grid.iter().map(|t| (t, 0.0)).collect();

    for signal in params {
        let sine: Waveform = grid
            .iter()
            .map(|t| {
                let angle = 2.0 * PI * signal.frequency * t + signal.phase;
                (t, signal.amplitude * angle.sin())
            })
            .collect();
        let cosine: Waveform = grid
            .iter()
            .map(|t| {
                let angle = 2.0 * PI * signal.frequency * t + signal.phase;
                (t, signal.amplitude * angle.cos())
            })
            .collect();

        for (i, sample) in aggregate.iter_mut().enumerate() {
            sample.1 += sine[i].1 + cosine[i].1;
        }

        sines.push(sine);
        cosines.push(cosine);
    }

    RegularSignalSet {
        sines,
        cosines,
        aggregate,
    }
}

/// Reconstruct a truncated Fourier series on `grid`. Harmonic k yields the
/// scaled waveforms `a_k·cos(k·ω0·t)` and `b_k·sin(k·ω0·t)`; the aggregate is
/// `a0/2 + Σ (cosine_k + sine_k)`, the DC term halved per the series
/// convention.
pub fn evaluate_fourier(params: &FourierParams, grid: &TimeGrid) -> FourierSeriesSet {
    let mut cosine_harmonics = Vec::with_capacity(HARMONICS);
    let mut sine_harmonics = Vec::with_capacity(HARMONICS);
    let mut aggregate: Waveform = grid.iter().map(|t| (t, params.dc / 2.0)).collect();

    for k in 1..=HARMONICS {
        let a = params.cosine_coeffs[k - 1];
        let b = params.sine_coeffs[k - 1];
        let harmonic_omega = k as f64 * params.omega;

        let cosine: Waveform = grid
            .iter()
            .map(|t| (t, a * (harmonic_omega * t).cos()))
            .collect();
        let sine: Waveform = grid
            .iter()
            .map(|t| (t, b * (harmonic_omega * t).sin()))
            .collect();

        for (i, sample) in aggregate.iter_mut().enumerate() {
            sample.1 += cosine[i].1 + sine[i].1;
        }

        cosine_harmonics.push(cosine);
        sine_harmonics.push(sine);
    }

    FourierSeriesSet {
        cosine_harmonics,
        sine_harmonics,
        aggregate,
    }
}
