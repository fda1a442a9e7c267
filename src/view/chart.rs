//! Chart specification
//!
//! A renderer-agnostic description of the bar chart: one bar per state,
//! colored by state, with axis labels and a title.

use serde::Serialize;

use super::format::format_si;
use crate::dataset::TransactionRecord;

/// Qualitative palette, one color per state in first-seen order
pub const STATE_COLORS: [&str; 10] = [
    "#636EFA", "#EF553B", "#00CC96", "#AB63FA", "#FFA15A", "#19D3F3", "#FF6692", "#B6E880",
    "#FF97FF", "#FECB52",
];

pub const X_AXIS_LABEL: &str = "State";
pub const Y_AXIS_LABEL: &str = "Transaction Amount (INR)";

/// One bar of the chart
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Bar {
    /// State name (x-axis category and color group)
    pub category: String,
    /// Transaction amount for the state
    pub value: f64,
    /// Fill color
    pub color: String,
    /// Label drawn above the bar
    pub text: String,
}

/// Abstract description of the bars to render
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChartSpec {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub bars: Vec<Bar>,
}

impl ChartSpec {
    /// Build the per-state bar chart for an already-filtered set of records
    ///
    /// States keep their first-seen order. A state appearing more than once
    /// gets a single bar whose height is the sum of its amounts.
    pub fn for_brand<'a>(
        brand: &str,
        records: impl IntoIterator<Item = &'a TransactionRecord>,
    ) -> Self {
        let mut totals: Vec<(String, f64)> = Vec::new();
        for record in records {
            match totals.iter_mut().find(|(state, _)| state == &record.state) {
                Some((_, total)) => *total += record.transaction_amount,
                None => totals.push((record.state.clone(), record.transaction_amount)),
            }
        }

        let bars = totals
            .into_iter()
            .enumerate()
            .map(|(idx, (category, value))| Bar {
                category,
                value,
                color: STATE_COLORS[idx % STATE_COLORS.len()].to_string(),
                text: format_si(value),
            })
            .collect();

        Self {
            title: format!("Transaction Amount by State for {}", brand),
            x_label: X_AXIS_LABEL.to_string(),
            y_label: Y_AXIS_LABEL.to_string(),
            bars,
        }
    }

    /// Tallest bar, or 0 when there are none
    pub fn max_value(&self) -> f64 {
        self.bars.iter().map(|b| b.value).fold(0.0, f64::max)
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(state: &str, amount: f64) -> TransactionRecord {
        TransactionRecord::new(state, 2021, 1, "PhonePe", 1, amount)
    }

    #[test]
    fn test_one_bar_per_state() {
        let records = vec![record("Maharashtra", 20_000_000.0), record("Tamil Nadu", 19_000_000.0)];
        let chart = ChartSpec::for_brand("PhonePe", &records);

        assert_eq!(chart.bars.len(), 2);
        assert_eq!(chart.bars[0].category, "Maharashtra");
        assert_eq!(chart.bars[0].value, 20_000_000.0);
        assert_eq!(chart.bars[0].text, "20M");
        assert_eq!(chart.bars[1].category, "Tamil Nadu");
        assert_eq!(chart.bars[1].text, "19M");
        assert_ne!(chart.bars[0].color, chart.bars[1].color);
    }

    #[test]
    fn test_labels_and_title() {
        let chart = ChartSpec::for_brand("Paytm", std::iter::empty());
        assert_eq!(chart.title, "Transaction Amount by State for Paytm");
        assert_eq!(chart.x_label, "State");
        assert_eq!(chart.y_label, "Transaction Amount (INR)");
        assert!(chart.is_empty());
        assert_eq!(chart.max_value(), 0.0);
    }

    #[test]
    fn test_repeated_state_is_summed() {
        let records = vec![
            record("Kerala", 100.0),
            record("Goa", 50.0),
            record("Kerala", 25.0),
        ];
        let chart = ChartSpec::for_brand("PhonePe", &records);

        assert_eq!(chart.bars.len(), 2);
        assert_eq!(chart.bars[0].category, "Kerala");
        assert_eq!(chart.bars[0].value, 125.0);
        assert_eq!(chart.max_value(), 125.0);
    }

    #[test]
    fn test_palette_wraps() {
        let records: Vec<_> = (0..12).map(|i| record(&format!("S{}", i), 1.0)).collect();
        let chart = ChartSpec::for_brand("PhonePe", &records);
        assert_eq!(chart.bars[10].color, chart.bars[0].color);
    }
}
