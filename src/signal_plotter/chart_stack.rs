use eframe::epaint::Color32;
use egui::Ui;
use egui_plot::{Legend, Line, Plot, PlotPoints};

use crate::evaluator::{FourierSeriesSet, RegularSignalSet};
use crate::signal::Waveform;

const CHART_WIDTH: f32 = 1000.0;
const CHART_HEIGHT: f32 = 300.0;

#[derive(Clone, Debug)]
struct ChartSeries {
    label: String,
    points: Waveform,
    color: Option<Color32>,
}

impl ChartSeries {
    fn auto(label: String, points: Waveform) -> Self {
        ChartSeries {
            label,
            points,
            color: None,
        }
    }

    fn colored(label: &str, points: Waveform, color: Color32) -> Self {
        ChartSeries {
            label: label.to_owned(),
            points,
            color: Some(color),
        }
    }
}

#[derive(Clone, Debug)]
struct ChartRow {
    title: &'static str,
    series: Vec<ChartSeries>,
}

impl ChartRow {
    fn show(&self, ui: &mut Ui, index: usize) {
        ui.heading(self.title);

        Plot::new(format!("chart_row_{}", index))
            .width(CHART_WIDTH)
            .height(CHART_HEIGHT)
            .legend(Legend::default())
            .show_grid(true)
            .x_axis_label("Time")
            .y_axis_label("Amplitude")
            .show(ui, |plot_ui| {
                for series in &self.series {
                    let points: Vec<[f64; 2]> =
                        series.points.iter().map(|&(t, y)| [t, y]).collect();
                    let mut line =
                        Line::new(PlotPoints::new(points)).name(series.label.as_str());
                    if let Some(color) = series.color {
                        line = line.color(color);
                    }
                    plot_ui.line(line);
                }
            });
    }
}

/// The fixed three-row chart stack, rebuilt in full by every plot action.
#[derive(Clone, Debug)]
pub(crate) struct ChartStack {
    rows: [ChartRow; 3],
}

impl ChartStack {
    pub(crate) fn from_regular(set: RegularSignalSet) -> Self {
        let signal_series = |waves: Vec<Waveform>| -> Vec<ChartSeries> {
            waves
                .into_iter()
                .enumerate()
                .map(|(i, wave)| ChartSeries::auto(format!("Signal {}", i + 1), wave))
                .collect()
        };

        ChartStack {
            rows: [
                ChartRow {
                    title: "Sine Signals",
                    series: signal_series(set.sines),
                },
                ChartRow {
                    title: "Cosine Signals",
                    series: signal_series(set.cosines),
                },
                ChartRow {
                    title: "Aggregated Signal",
                    series: vec![ChartSeries::colored(
                        "Aggregated Signal",
                        set.aggregate,
                        Color32::RED,
                    )],
                },
            ],
        }
    }

    pub(crate) fn from_fourier(set: FourierSeriesSet) -> Self {
        let harmonic_series =
            |waves: Vec<Waveform>, coeff: &'static str, func: &'static str| -> Vec<ChartSeries> {
                waves
                    .into_iter()
                    .enumerate()
                    .map(|(k, wave)| {
                        let label = format!("{}{}*{}({}w0t)", coeff, k + 1, func, k + 1);
                        ChartSeries::auto(label, wave)
                    })
                    .collect()
            };

        ChartStack {
            rows: [
                ChartRow {
                    title: "Cosine Components",
                    series: harmonic_series(set.cosine_harmonics, "a", "cos"),
                },
                ChartRow {
                    title: "Sine Components",
                    series: harmonic_series(set.sine_harmonics, "b", "sin"),
                },
                ChartRow {
                    title: "Aggregated Signal",
                    series: vec![ChartSeries::colored(
                        "Aggregated Signal",
                        set.aggregate,
                        Color32::RED,
                    )],
                },
            ],
        }
    }

    pub(crate) fn show(&self, ui: &mut Ui) {
        for (index, row) in self.rows.iter().enumerate() {
            row.show(ui, index);
        }
    }
}
