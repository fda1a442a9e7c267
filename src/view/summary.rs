//! Summary line shown under the chart

use serde::Serialize;
use std::fmt;

use super::format::{format_amount, format_count};
use crate::dataset::TransactionRecord;

/// Totals over a filtered set of records
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq)]
pub struct Summary {
    pub total_count: u64,
    pub total_amount: f64,
}

impl Summary {
    /// Sum counts and amounts
    ///
    /// The CSV loader bounds per-brand totals; records built in code saturate
    /// at `u64::MAX` instead of overflowing.
    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a TransactionRecord>) -> Self {
        records.into_iter().fold(Self::default(), |acc, r| Self {
            total_count: acc.total_count.saturating_add(r.transaction_count),
            total_amount: acc.total_amount + r.transaction_amount,
        })
    }

    /// Full dashboard line, e.g. `📊 Total Transactions: 290,000 | 💰 Total Amount: ₹39,000,000`
    pub fn text(&self) -> String {
        format!(
            "📊 Total Transactions: {} | 💰 Total Amount: ₹{}",
            format_count(self.total_count),
            format_amount(self.total_amount)
        )
    }

    /// Bare figures, e.g. `290,000 | ₹39,000,000`
    pub fn compact(&self) -> String {
        format!(
            "{} | ₹{}",
            format_count(self.total_count),
            format_amount(self.total_amount)
        )
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}
