use crate::data::error::{DataError, DataResult};
use crate::data::model::CountryRecord;

// ---------------------------------------------------------------------------
// SelectionEvent – what the chart reports on a click
// ---------------------------------------------------------------------------

/// Identity of the plotted point the user clicked: the dataset-local entry
/// index of the bar, as reported by the chart's hit test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionEvent {
    pub entry_index: usize,
}

// ---------------------------------------------------------------------------
// Resolution
// ---------------------------------------------------------------------------

/// Resolve a selection event to the record that produced the plotted point.
///
/// Resolution matches on the `index` field rather than positional indexing,
/// so it stays correct even for a non-dense record sequence, and a reported
/// index with no matching record (a stale event, say after a dataset swap)
/// comes back as an error instead of a panic.
pub fn resolve_selection(
    records: &[CountryRecord],
    event: SelectionEvent,
) -> DataResult<&CountryRecord> {
    records
        .iter()
        .find(|record| record.index == event.entry_index)
        .ok_or(DataError::SelectionOutOfRange {
            index: event.entry_index,
            len: records.len(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config;
    use crate::data::parser::parse_rows;

    #[test]
    fn test_every_plotted_record_round_trips_through_its_index() {
        let records = parse_rows(config::BIRTH_RATE_ROWS).unwrap();
        for record in &records {
            let event = SelectionEvent {
                entry_index: record.index,
            };
            assert_eq!(resolve_selection(&records, event).unwrap(), record);
        }
    }

    #[test]
    fn test_unknown_index_is_out_of_range() {
        let records = parse_rows(&["Japan, 1.4"]).unwrap();
        let err = resolve_selection(&records, SelectionEvent { entry_index: 999 }).unwrap_err();
        assert_eq!(
            err,
            DataError::SelectionOutOfRange {
                index: 999,
                len: 1,
            }
        );
    }

    #[test]
    fn test_resolution_matches_index_field_not_position() {
        // Hand-built non-dense sequence: position 0 holds index 4.
        let records = vec![
            CountryRecord {
                index: 4,
                country: "Japan".into(),
                birth_rate: 1.4,
            },
            CountryRecord {
                index: 7,
                country: "Norway".into(),
                birth_rate: 1.72,
            },
        ];
        let resolved = resolve_selection(&records, SelectionEvent { entry_index: 7 }).unwrap();
        assert_eq!(resolved.country, "Norway");
        assert!(resolve_selection(&records, SelectionEvent { entry_index: 0 }).is_err());
    }

    #[test]
    fn test_empty_dataset_resolves_nothing() {
        let err = resolve_selection(&[], SelectionEvent { entry_index: 0 }).unwrap_err();
        assert_eq!(err, DataError::SelectionOutOfRange { index: 0, len: 0 });
    }
}
