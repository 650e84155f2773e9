use crate::data::error::DataResult;
use crate::data::parser;

// ---------------------------------------------------------------------------
// CountryRecord – one row of the input table
// ---------------------------------------------------------------------------

/// A single country's birth rate, parsed from one raw input row.
#[derive(Debug, Clone, PartialEq)]
pub struct CountryRecord {
    /// Zero-based position in the input, also the bar's x coordinate.
    pub index: usize,
    /// Country name shown on the x axis and in the marker.
    pub country: String,
    /// Births per woman.
    pub birth_rate: f64,
}

impl CountryRecord {
    /// The (x, y) pair the chart draws for this record.
    pub fn plotted(&self) -> PlottedPoint {
        PlottedPoint {
            x: self.index as f64,
            y: self.birth_rate,
        }
    }

    /// Birth rate as the fixed two-decimal display string.
    pub fn formatted_rate(&self) -> String {
        format_rate(self.birth_rate)
    }
}

// ---------------------------------------------------------------------------
// PlottedPoint – derived chart coordinates
// ---------------------------------------------------------------------------

/// The (x, y) coordinate pair handed to the chart for one record.
/// Regenerated from the record sequence whenever the plot is rebuilt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlottedPoint {
    pub x: f64,
    pub y: f64,
}

// ---------------------------------------------------------------------------
// BirthRateDataset – the complete parsed table
// ---------------------------------------------------------------------------

/// The full ordered record sequence, parsed once at startup and immutable
/// afterwards. Record indices are dense (`0..len`) and follow input order.
#[derive(Debug, Clone, Default)]
pub struct BirthRateDataset {
    records: Vec<CountryRecord>,
}

impl BirthRateDataset {
    /// Parse raw `"<country>, <rate>"` rows into a dataset.
    pub fn from_rows(rows: &[&str]) -> DataResult<Self> {
        Ok(BirthRateDataset {
            records: parser::parse_rows(rows)?,
        })
    }

    /// All records, in input order.
    pub fn records(&self) -> &[CountryRecord] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Value formatting
// ---------------------------------------------------------------------------

/// Format a birth rate with exactly two decimal places (`1.8` → `"1.80"`).
/// Used for both the marker overlay and the per-bar value labels.
pub fn format_rate(value: f64) -> String {
    format!("{value:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_rate_pads_to_two_decimals() {
        assert_eq!(format_rate(1.8), "1.80");
        assert_eq!(format_rate(1.4), "1.40");
        assert_eq!(format_rate(0.92), "0.92");
        assert_eq!(format_rate(0.0), "0.00");
    }

    #[test]
    fn test_plotted_point_mirrors_index_and_rate() {
        let record = CountryRecord {
            index: 3,
            country: "Japan".into(),
            birth_rate: 1.4,
        };
        assert_eq!(record.plotted(), PlottedPoint { x: 3.0, y: 1.4 });
        assert_eq!(record.formatted_rate(), "1.40");
    }

    #[test]
    fn test_dataset_accessors() {
        let dataset = BirthRateDataset::from_rows(&["Japan, 1.4", "Norway, 1.72"]).unwrap();
        assert_eq!(dataset.len(), 2);
        assert!(!dataset.is_empty());
        assert_eq!(dataset.records()[1].country, "Norway");
        assert!(BirthRateDataset::default().is_empty());
    }
}
