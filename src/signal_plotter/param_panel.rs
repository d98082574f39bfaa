use egui::{Grid, TextEdit, Ui};
use thiserror::Error;

use crate::signal::{
    omega_from_period, period_from_omega, FourierParams, SinusoidParams, HARMONICS,
};

const FIELD_WIDTH: f32 = 64.0;

/// A text field whose contents did not parse as a number when a plot was
/// requested.
#[derive(Debug, Error)]
#[error("field `{field}` is not a number: \"{value}\"")]
pub struct InvalidNumericInput {
    pub field: String,
    pub value: String,
}

fn parse_field(field: &str, value: &str) -> Result<f64, InvalidNumericInput> {
    value.trim().parse().map_err(|_| InvalidNumericInput {
        field: field.to_owned(),
        value: value.to_owned(),
    })
}

/// Field grid for the three-sinusoid mode: per signal an amplitude, a
/// frequency and a phase entry.
#[derive(Clone, Debug)]
pub(crate) struct RegularParamPanel {
    entries: [[String; 3]; 3],
}

impl Default for RegularParamPanel {
    fn default() -> Self {
        RegularParamPanel {
            entries: std::array::from_fn(|_| std::array::from_fn(|_| "1.0".to_owned())),
        }
    }
}

impl RegularParamPanel {
    pub(crate) fn show(&mut self, ui: &mut Ui) {
        Grid::new("regular_params").show(ui, |ui| {
            for (i, row) in self.entries.iter_mut().enumerate() {
                ui.label(format!("Signal {}:", i + 1));
                for (text, name) in row.iter_mut().zip(["A", "f", "θ"]) {
                    ui.label(name);
                    ui.add(TextEdit::singleline(text).desired_width(FIELD_WIDTH));
                }
                ui.end_row();
            }
        });
    }

    /// Parse the grid into one parameter triple per signal, failing on the
    /// first field that is not a number.
    pub(crate) fn params(&self) -> Result<[SinusoidParams; 3], InvalidNumericInput> {
        Ok([
            self.signal_params(0)?,
            self.signal_params(1)?,
            self.signal_params(2)?,
        ])
    }

    fn signal_params(&self, index: usize) -> Result<SinusoidParams, InvalidNumericInput> {
        let [amplitude, frequency, phase] = &self.entries[index];

        Ok(SinusoidParams {
            amplitude: parse_field(&format!("Signal {} A", index + 1), amplitude)?,
            frequency: parse_field(&format!("Signal {} f", index + 1), frequency)?,
            phase: parse_field(&format!("Signal {} θ", index + 1), phase)?,
        })
    }
}

/// Field grid for Fourier mode: the a0/w0/T core row plus nine cosine and
/// nine sine coefficient entries.
#[derive(Clone, Debug)]
pub(crate) struct FourierParamPanel {
    dc: String,
    omega: String,
    period: String,
    cosine_coeffs: [String; HARMONICS],
    sine_coeffs: [String; HARMONICS],
}

impl Default for FourierParamPanel {
    fn default() -> Self {
        FourierParamPanel {
            dc: "1.0".to_owned(),
            omega: "1.0".to_owned(),
            period: "6.283185".to_owned(),
            cosine_coeffs: std::array::from_fn(|_| "0.0".to_owned()),
            sine_coeffs: std::array::from_fn(|_| "0.0".to_owned()),
        }
    }
}

impl FourierParamPanel {
    pub(crate) fn show(&mut self, ui: &mut Ui) {
        let (omega_response, period_response) = Grid::new("fourier_params")
            .show(ui, |ui| {
                ui.label("Core Parameters");
                ui.label("a0");
                ui.add(TextEdit::singleline(&mut self.dc).desired_width(FIELD_WIDTH));
                ui.label("w0");
                let omega_response =
                    ui.add(TextEdit::singleline(&mut self.omega).desired_width(FIELD_WIDTH));
                ui.label("T");
                let period_response =
                    ui.add(TextEdit::singleline(&mut self.period).desired_width(FIELD_WIDTH));
                ui.end_row();

                ui.label("Cosine Coefficients");
                for (k, text) in self.cosine_coeffs.iter_mut().enumerate() {
                    ui.label(format!("a{}", k + 1));
                    ui.add(TextEdit::singleline(text).desired_width(FIELD_WIDTH));
                }
                ui.end_row();

                ui.label("Sine Coefficients");
                for (k, text) in self.sine_coeffs.iter_mut().enumerate() {
                    ui.label(format!("b{}", k + 1));
                    ui.add(TextEdit::singleline(text).desired_width(FIELD_WIDTH));
                }
                ui.end_row();

                (omega_response, period_response)
            })
            .inner;

        // Re-derive only for the field the user edited this frame; the
        // write-back below never counts as an edit, so the two derivations
        // cannot chain.
        if omega_response.changed() {
            self.sync_period_from_omega();
        }
        if period_response.changed() {
            self.sync_omega_from_period();
        }
    }

    /// Parse the grid into a Fourier parameter set, failing on the first
    /// field that is not a number.
    pub(crate) fn params(&self) -> Result<FourierParams, InvalidNumericInput> {
        let dc = parse_field("a0", &self.dc)?;
        let omega = parse_field("w0", &self.omega)?;
        let period = parse_field("T", &self.period)?;

        let mut cosine_coeffs = [0.0; HARMONICS];
        for (k, text) in self.cosine_coeffs.iter().enumerate() {
            cosine_coeffs[k] = parse_field(&format!("a{}", k + 1), text)?;
        }
        let mut sine_coeffs = [0.0; HARMONICS];
        for (k, text) in self.sine_coeffs.iter().enumerate() {
            sine_coeffs[k] = parse_field(&format!("b{}", k + 1), text)?;
        }

        Ok(FourierParams {
            dc,
            omega,
            period,
            cosine_coeffs,
            sine_coeffs,
        })
    }

    fn sync_period_from_omega(&mut self) {
        if let Ok(omega) = self.omega.trim().parse::<f64>() {
            if let Some(period) = period_from_omega(omega) {
                self.period = format!("{:.6}", period);
            }
        }
    }

    fn sync_omega_from_period(&mut self) {
        if let Ok(period) = self.period.trim().parse::<f64>() {
            if let Some(omega) = omega_from_period(period) {
                self.omega = format!("{:.6}", omega);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_fields_parse_to_documented_values() {
        let params = RegularParamPanel::default().params().unwrap();
        for signal in &params {
            assert_eq!(signal.amplitude, 1.0);
            assert_eq!(signal.frequency, 1.0);
            assert_eq!(signal.phase, 1.0);
        }

        let params = FourierParamPanel::default().params().unwrap();
        assert_eq!(params.dc, 1.0);
        assert_eq!(params.omega, 1.0);
        assert_eq!(params.period, 6.283185);
        assert_eq!(params.cosine_coeffs, [0.0; 9]);
        assert_eq!(params.sine_coeffs, [0.0; 9]);
    }

    #[test]
    fn parse_failure_names_the_failing_field() {
        let mut panel = RegularParamPanel::default();
        panel.entries[1][1] = "not a number".to_owned();

        let error = panel.params().unwrap_err();
        assert_eq!(error.field, "Signal 2 f");
        assert_eq!(error.value, "not a number");

        let mut panel = FourierParamPanel::default();
        panel.cosine_coeffs[2] = "1.2.3".to_owned();

        let error = panel.params().unwrap_err();
        assert_eq!(error.field, "a3");
    }

    #[test]
    fn editing_omega_rewrites_period_to_six_decimals() {
        let mut panel = FourierParamPanel::default();

        panel.omega = "1.0".to_owned();
        panel.sync_period_from_omega();
        assert_eq!(panel.period, "6.283185");

        panel.omega = "2.0".to_owned();
        panel.sync_period_from_omega();
        assert_eq!(panel.period, "3.141593");
    }

    #[test]
    fn editing_period_rewrites_omega() {
        let mut panel = FourierParamPanel::default();

        panel.period = format!("{}", std::f64::consts::PI);
        panel.sync_omega_from_period();
        assert_eq!(panel.omega, "2.000000");
    }

    #[test]
    fn zero_or_unparseable_edits_leave_the_dependent_field_alone() {
        let mut panel = FourierParamPanel::default();
        panel.period = "unchanged".to_owned();

        panel.omega = "0.0".to_owned();
        panel.sync_period_from_omega();
        assert_eq!(panel.period, "unchanged");

        panel.omega = "half".to_owned();
        panel.sync_period_from_omega();
        assert_eq!(panel.period, "unchanged");

        panel.omega = "unchanged".to_owned();
        panel.period = "0".to_owned();
        panel.sync_omega_from_period();
        assert_eq!(panel.omega, "unchanged");
    }
}
