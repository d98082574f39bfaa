use std::f64::consts::PI;
use std::time::Instant;

use egui::{ScrollArea, Ui};
use egui_modal::{Icon, Modal};

use crate::evaluator::{evaluate_fourier, evaluate_regular};
use crate::signal::TimeGrid;
use crate::signal_plotter::chart_stack::ChartStack;
use crate::signal_plotter::param_panel::{
    FourierParamPanel, InvalidNumericInput, RegularParamPanel,
};
use crate::signal_plotter::PlotMode;

/// The single plotter surface: mode selector, parameter grid, plot action
/// and the resulting chart stack.
pub struct SignalPlotter {
    mode: PlotMode,
    regular_panel: RegularParamPanel,
    fourier_panel: FourierParamPanel,
    charts: Option<ChartStack>,
    error_message: Option<String>,
}

impl SignalPlotter {
    pub fn new() -> Self {
        SignalPlotter {
            mode: PlotMode::Regular,
            regular_panel: RegularParamPanel::default(),
            fourier_panel: FourierParamPanel::default(),
            charts: None,
            error_message: None,
        }
    }

    pub fn render(&mut self, ui: &mut Ui) {
        let error_modal = self.error_modal(ui);

        ui.group(|ui| {
            ui.label("Plot Mode");
            ui.horizontal(|ui| {
                ui.radio_value(&mut self.mode, PlotMode::Regular, "Sinusoidal Signals");
                ui.radio_value(&mut self.mode, PlotMode::Fourier, "Fourier Series");
            });
        });

        ui.group(|ui| {
            ui.label("Signal Parameters");
            match self.mode {
                PlotMode::Regular => self.regular_panel.show(ui),
                PlotMode::Fourier => self.fourier_panel.show(ui),
            }
        });

        if ui.button("Plot Signals").clicked() {
            if let Err(error) = self.plot_signals() {
                self.error_message = Some(error.to_string());
                error_modal.open();
            }
        }

        ScrollArea::vertical().show(ui, |ui| {
            if let Some(charts) = &self.charts {
                charts.show(ui);
            }
        });
    }

    /// Recompute every waveform from the current field text and swap in a
    /// fresh chart stack. A field that fails to parse aborts the action and
    /// keeps the previous charts on screen.
    fn plot_signals(&mut self) -> Result<(), InvalidNumericInput> {
        let start = Instant::now();

        let charts = match self.mode {
            PlotMode::Regular => {
                let params = self.regular_panel.params()?;
                let grid = TimeGrid::over_span(2.0 * PI);
                ChartStack::from_regular(evaluate_regular(&params, &grid))
            }
            PlotMode::Fourier => {
                let params = self.fourier_panel.params()?;
                let grid = TimeGrid::over_span(params.period);
                ChartStack::from_fourier(evaluate_fourier(&params, &grid))
            }
        };

        let time = Instant::now() - start;
        log::info!("Signal Evaluation Elapsed Time: {:?}", time);

        self.charts = Some(charts);
        Ok(())
    }

    fn error_modal(&self, ui: &mut Ui) -> Modal {
        let modal = Modal::new(ui.ctx(), "invalid_input_modal");

        modal.show(|ui| {
            let message = self.error_message.as_deref().unwrap_or("");
            modal.frame(ui, |ui| {
                modal.body_and_icon(ui, message, Icon::Error);
            });
            modal.buttons(ui, |ui| {
                if ui.button("Ok").clicked() {
                    modal.close();
                }
            });
        });

        modal
    }
}

impl Default for SignalPlotter {
    fn default() -> Self {
        SignalPlotter::new()
    }
}
