mod chart_stack;
mod param_panel;
mod signal_plotter;

pub use param_panel::InvalidNumericInput;
pub use signal_plotter::SignalPlotter;

/// Which signal family is being parameterized and plotted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlotMode {
    Regular,
    Fourier,
}
