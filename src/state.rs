use anyhow::Context;

use crate::config;
use crate::data::model::BirthRateDataset;
use crate::data::selection::{resolve_selection, SelectionEvent};

// ---------------------------------------------------------------------------
// Marker overlay
// ---------------------------------------------------------------------------

/// Text content of the marker overlay: exactly the two lines the board shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerOverlay {
    /// Country name of the selected record.
    pub country_text: String,
    /// Birth rate, already formatted with two decimals.
    pub rate_text: String,
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Parsed dataset; empty if the embedded table failed to parse.
    pub dataset: BirthRateDataset,

    /// Index of the currently selected record, if any.
    pub selected: Option<usize>,

    /// Marker overlay content; None while nothing is selected.
    pub marker: Option<MarkerOverlay>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

/// Parse the embedded table into a dataset.
fn load_builtin() -> anyhow::Result<BirthRateDataset> {
    BirthRateDataset::from_rows(config::BIRTH_RATE_ROWS)
        .context("parsing embedded birth-rate table")
}

impl AppState {
    /// Build the state from the embedded dataset. A parse failure leaves the
    /// chart empty and surfaces the error in the top bar.
    pub fn from_builtin_dataset() -> Self {
        match load_builtin() {
            Ok(dataset) => {
                log::info!("loaded {} birth-rate records", dataset.len());
                AppState {
                    dataset,
                    selected: None,
                    marker: None,
                    status_message: None,
                }
            }
            Err(e) => {
                log::error!("failed to load embedded dataset: {e:#}");
                AppState {
                    dataset: BirthRateDataset::default(),
                    selected: None,
                    marker: None,
                    status_message: Some(format!("Error: {e:#}")),
                }
            }
        }
    }

    /// Handle a selection event reported by the chart.
    ///
    /// On success the marker overlay is rebuilt from the resolved record; an
    /// event that resolves to no record is dropped without touching the
    /// current selection or overlay.
    pub fn apply_selection(&mut self, event: SelectionEvent) {
        match resolve_selection(self.dataset.records(), event) {
            Ok(record) => {
                self.selected = Some(record.index);
                self.marker = Some(MarkerOverlay {
                    country_text: record.country.clone(),
                    rate_text: record.formatted_rate(),
                });
            }
            Err(e) => log::debug!("ignoring selection: {e}"),
        }
    }

    /// Drop the current selection and hide the marker.
    pub fn clear_selection(&mut self) {
        self.selected = None;
        self.marker = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_country_state() -> AppState {
        let dataset = BirthRateDataset::from_rows(&["Japan, 1.4", "Norway, 1.72"]).unwrap();
        AppState {
            dataset,
            selected: None,
            marker: None,
            status_message: None,
        }
    }

    #[test]
    fn test_selection_fills_marker_from_record() {
        let mut state = two_country_state();
        state.apply_selection(SelectionEvent { entry_index: 1 });
        assert_eq!(state.selected, Some(1));
        let marker = state.marker.unwrap();
        assert_eq!(marker.country_text, "Norway");
        assert_eq!(marker.rate_text, "1.72");
    }

    #[test]
    fn test_out_of_range_selection_leaves_state_untouched() {
        let mut state = two_country_state();
        state.apply_selection(SelectionEvent { entry_index: 0 });
        let marker_before = state.marker.clone();

        state.apply_selection(SelectionEvent { entry_index: 999 });
        assert_eq!(state.selected, Some(0));
        assert_eq!(state.marker, marker_before);
    }

    #[test]
    fn test_clear_selection_hides_marker() {
        let mut state = two_country_state();
        state.apply_selection(SelectionEvent { entry_index: 0 });
        assert!(state.marker.is_some());

        state.clear_selection();
        assert_eq!(state.selected, None);
        assert_eq!(state.marker, None);
    }

    #[test]
    fn test_builtin_dataset_loads() {
        let state = AppState::from_builtin_dataset();
        assert_eq!(state.dataset.len(), 10);
        assert!(state.status_message.is_none());
    }
}
