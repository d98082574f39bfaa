//! Time-domain plotting of parameterized sinusoid sums and truncated
//! Fourier series.

pub mod evaluator;
pub mod signal;
pub mod signal_plotter;
