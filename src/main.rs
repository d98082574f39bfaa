use eframe::Frame;
use egui::CentralPanel;
use log::LevelFilter;
use simple_logger::SimpleLogger;

use fourier_plotter::signal_plotter::SignalPlotter;

struct App {
    plotter: SignalPlotter,
}

impl App {
    fn new() -> Self {
        App {
            plotter: SignalPlotter::new(),
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        CentralPanel::default().show(ctx, |ui| {
            self.plotter.render(ui);
        });
    }
}

fn main() -> Result<(), eframe::Error> {
    SimpleLogger::new()
        .with_level(LevelFilter::Info)
        .init()
        .unwrap();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1040.0, 900.0])
            .with_resizable(false),
        ..Default::default()
    };
    eframe::run_native(
        "Fourier Plotter",
        options,
        Box::new(|_cc| Ok(Box::new(App::new()))),
    )
}
