use crate::data::error::{DataError, DataResult};
use crate::data::model::CountryRecord;

/// Field separator between country name and rate.
const SEPARATOR: &str = ", ";

// ---------------------------------------------------------------------------
// Row parsing
// ---------------------------------------------------------------------------

/// Parse an ordered batch of raw `"<country>, <rate>"` rows into records.
///
/// Each record's `index` is its zero-based position in `rows`, so the output
/// always carries a dense index sequence in input order. A row that does not
/// have exactly two separator-delimited fields aborts the whole parse; a rate
/// field that is not a number degrades to `0.0` and the row is kept.
pub fn parse_rows(rows: &[&str]) -> DataResult<Vec<CountryRecord>> {
    rows.iter()
        .enumerate()
        .map(|(index, raw)| parse_row(index, raw))
        .collect()
}

/// Parse a single row sitting at position `index` in the input.
fn parse_row(index: usize, raw: &str) -> DataResult<CountryRecord> {
    let fields: Vec<&str> = raw.split(SEPARATOR).collect();
    let (country, rate_field) = match fields[..] {
        [country, rate_field] => (country, rate_field),
        _ => {
            return Err(DataError::MalformedRow {
                row: index,
                raw: raw.to_string(),
            })
        }
    };

    let birth_rate = match rate_field.parse::<f64>() {
        Ok(rate) => rate,
        Err(_) => {
            log::warn!("row {index} ({country}): unparseable rate {rate_field:?}, using 0.0");
            0.0
        }
    };

    Ok(CountryRecord {
        index,
        country: country.to_string(),
        birth_rate,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_assigns_dense_indices_in_input_order() {
        let records = parse_rows(&["Japan, 1.4", "Norway, 1.72"]).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].index, 0);
        assert_eq!(records[0].country, "Japan");
        assert_eq!(records[0].birth_rate, 1.4);
        assert_eq!(records[1].index, 1);
        assert_eq!(records[1].country, "Norway");
        assert_eq!(records[1].birth_rate, 1.72);
    }

    #[test]
    fn test_unparseable_rate_falls_back_to_zero() {
        let records = parse_rows(&["Atlantis, not-a-number"]).unwrap();
        assert_eq!(records[0].country, "Atlantis");
        assert_eq!(records[0].birth_rate, 0.0);
    }

    #[test]
    fn test_row_without_separator_is_rejected() {
        let err = parse_rows(&["NoSeparatorHere"]).unwrap_err();
        assert_eq!(
            err,
            DataError::MalformedRow {
                row: 0,
                raw: "NoSeparatorHere".to_string(),
            }
        );
    }

    #[test]
    fn test_row_with_extra_fields_is_rejected() {
        // A second separator means the split no longer yields two fields.
        let err = parse_rows(&["Korea, South, 0.92"]).unwrap_err();
        assert!(matches!(err, DataError::MalformedRow { row: 0, .. }));
    }

    #[test]
    fn test_malformed_row_aborts_the_batch() {
        let err = parse_rows(&["Japan, 1.4", "garbage"]).unwrap_err();
        assert!(matches!(err, DataError::MalformedRow { row: 1, .. }));
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        assert_eq!(parse_rows(&[]).unwrap(), Vec::new());
    }
}
