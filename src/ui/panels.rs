use eframe::egui::{Color32, RichText, Ui};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top title / status bar.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.strong("National Birth Rates");

        ui.separator();
        ui.label(format!("{} countries", state.dataset.len()));

        ui.separator();
        match &state.marker {
            Some(marker) => {
                ui.label(format!("{}: {}", marker.country_text, marker.rate_text));
            }
            None => {
                ui.label("Click a bar for details");
            }
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}
