mod app;
mod color;
mod config;
mod data;
mod state;
mod ui;

use app::NatalityApp;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 600.0])
            .with_min_inner_size([500.0, 350.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Natality – Birth Rates",
        options,
        Box::new(|_cc| Ok(Box::new(NatalityApp::new()))),
    )
}
