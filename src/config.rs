use eframe::egui::Color32;

use crate::color;

// ---------------------------------------------------------------------------
// Embedded dataset
// ---------------------------------------------------------------------------

/// Birth rates (births per woman) for a selection of countries, one raw
/// `"<country>, <rate>"` row per entry. Input order is plot order.
pub const BIRTH_RATE_ROWS: &[&str] = &[
    "Australia, 1.83",
    "Belgium, 1.71",
    "Germany, 1.59",
    "Japan, 1.4",
    "Netherlands, 1.66",
    "Norway, 1.72",
    "Singapore, 1.20",
    "Taiwan, 1.15",
    "South Korea, 0.92",
    "United Kingdom, 1.8",
];

/// Replacement-level fertility, drawn as the upper guide line.
pub const POPULATION_REPLACEMENT_RATE: f64 = 2.1;

/// High-income country average, drawn as the lower guide line.
pub const HIGH_INCOME_AVERAGE: f64 = 1.6;

// ---------------------------------------------------------------------------
// Chart configuration
// ---------------------------------------------------------------------------

/// A labelled horizontal guide line drawn across the chart.
#[derive(Debug, Clone)]
pub struct ReferenceLine {
    pub label: String,
    pub value: f64,
    pub color: Color32,
    /// Whether the text label sits above (true) or below (false) the line.
    pub label_above: bool,
}

/// Immutable chart shape and styling, handed to the plot by reference.
/// Built once at startup; nothing mutates it afterwards.
#[derive(Debug, Clone)]
pub struct ChartConfig {
    /// Fixed y-axis window.
    pub y_min: f64,
    pub y_max: f64,
    /// Bar width in plot units (bars are centred on integer x positions).
    pub bar_width: f64,
    /// Draw the two-decimal value label above every bar.
    pub show_bar_values: bool,
    pub reference_lines: Vec<ReferenceLine>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        ChartConfig {
            y_min: 0.0,
            y_max: 2.5,
            bar_width: 0.7,
            show_bar_values: true,
            reference_lines: vec![
                ReferenceLine {
                    label: format!("Population Replacement Rate: {POPULATION_REPLACEMENT_RATE}"),
                    value: POPULATION_REPLACEMENT_RATE,
                    color: color::REFERENCE,
                    label_above: true,
                },
                ReferenceLine {
                    label: format!("Average (High Income): {HIGH_INCOME_AVERAGE}"),
                    value: HIGH_INCOME_AVERAGE,
                    color: color::REFERENCE,
                    label_above: false,
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::parser::parse_rows;

    #[test]
    fn test_embedded_rows_parse_cleanly_with_dense_indices() {
        let records = parse_rows(BIRTH_RATE_ROWS).unwrap();
        assert_eq!(records.len(), BIRTH_RATE_ROWS.len());
        for (position, record) in records.iter().enumerate() {
            assert_eq!(record.index, position);
        }
        assert_eq!(records[0].country, "Australia");
        assert_eq!(records[9].country, "United Kingdom");
        assert_eq!(records[9].birth_rate, 1.8);
    }

    #[test]
    fn test_default_config_carries_both_guide_lines() {
        let config = ChartConfig::default();
        assert_eq!(config.reference_lines.len(), 2);
        assert_eq!(config.reference_lines[0].value, POPULATION_REPLACEMENT_RATE);
        assert_eq!(config.reference_lines[1].value, HIGH_INCOME_AVERAGE);
        assert!(config.reference_lines[0].label.ends_with("2.1"));
        assert!(config.reference_lines[1].label.ends_with("1.6"));
        assert!(config.y_min < config.y_max);
    }
}
