//! Core data types for the dashboard dataset
//!
//! A `TransactionRecord` is one row of the aggregated-user table:
//! which state, which period, which payment brand, and how much moved.

use serde::{Deserialize, Serialize};

/// One row of the aggregated transaction table
///
/// Field names follow the CSV headers of the exported table
/// (`State`, `Year`, `Quarter`, `Brand`, `Transaction_count`, `Transaction_amount`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransactionRecord {
    /// Indian state name
    #[serde(alias = "State")]
    pub state: String,
    /// Calendar year
    #[serde(alias = "Year")]
    pub year: i32,
    /// Quarter of the year (1-4)
    #[serde(alias = "Quarter")]
    pub quarter: u8,
    /// Payment brand (PhonePe, Google Pay, ...)
    #[serde(alias = "Brand")]
    pub brand: String,
    /// Number of transactions
    #[serde(alias = "Transaction_count")]
    pub transaction_count: u64,
    /// Total transaction value in INR
    #[serde(alias = "Transaction_amount")]
    pub transaction_amount: f64,
}

impl TransactionRecord {
    /// Create a record
    pub fn new(
        state: impl Into<String>,
        year: i32,
        quarter: u8,
        brand: impl Into<String>,
        transaction_count: u64,
        transaction_amount: f64,
    ) -> Self {
        Self {
            state: state.into(),
            year,
            quarter,
            brand: brand.into(),
            transaction_count,
            transaction_amount,
        }
    }

    /// Check whether this record belongs to `brand` (exact match)
    pub fn is_brand(&self, brand: &str) -> bool {
        self.brand == brand
    }
}
