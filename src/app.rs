use eframe::egui;

use crate::config::ChartConfig;
use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct NatalityApp {
    state: AppState,
    config: ChartConfig,
}

impl NatalityApp {
    /// Parse the embedded dataset and set up the default chart shape.
    pub fn new() -> Self {
        NatalityApp {
            state: AppState::from_builtin_dataset(),
            config: ChartConfig::default(),
        }
    }
}

impl eframe::App for NatalityApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: title and status ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.state);
        });

        // ---- Central panel: bar chart ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::birth_rate_chart(ui, &mut self.state, &self.config);
        });
    }
}
