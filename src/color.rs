use eframe::egui::Color32;

// ---------------------------------------------------------------------------
// Chart palette
// ---------------------------------------------------------------------------
// Fixed palette. Bars sit on a light yellow, the selected bar and its marker
// switch to orange, guide lines and their labels share the red.

/// Unselected bar fill.
pub const BAR: Color32 = Color32::from_rgb(255, 212, 96);

/// Selected bar fill, marker board and marker stick.
pub const HIGHLIGHT: Color32 = Color32::from_rgb(240, 123, 63);

/// Reference lines and their inline labels.
pub const REFERENCE: Color32 = Color32::from_rgb(234, 84, 85);

/// Per-bar value labels above the bars.
pub const VALUE_LABEL: Color32 = Color32::from_rgb(45, 64, 89);

/// Text on the marker board.
pub const MARKER_TEXT: Color32 = Color32::WHITE;
