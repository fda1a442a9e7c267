//! Dataset holder
//!
//! An immutable, ordered table of [`TransactionRecord`]s plus the distinct
//! brand values derived from it. Built once at startup (from the compiled-in
//! sample or a CSV export) and shared read-only afterwards.

mod csv_import;
mod error;
mod types;

pub use csv_import::MAX_TRANSACTION_AMOUNT;
pub use error::{DatasetError, DatasetResult};
pub use types::TransactionRecord;

/// Ordered, immutable collection of transaction records
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    records: Vec<TransactionRecord>,
    /// Distinct brands in first-seen order
    brands: Vec<String>,
}

impl Dataset {
    /// Build a dataset from records, deriving the brand list
    pub fn new(records: Vec<TransactionRecord>) -> Self {
        let mut brands: Vec<String> = Vec::new();
        for record in &records {
            if !brands.iter().any(|b| b == &record.brand) {
                brands.push(record.brand.clone());
            }
        }

        Self { records, brands }
    }

    /// The mock aggregated-user table the dashboard ships with
    pub fn sample() -> Self {
        Self::new(vec![
            TransactionRecord::new("Maharashtra", 2021, 1, "PhonePe", 150_000, 20_000_000.0),
            TransactionRecord::new("Karnataka", 2021, 1, "Google Pay", 120_000, 18_000_000.0),
            TransactionRecord::new("Delhi", 2021, 1, "Paytm", 95_000, 13_000_000.0),
            TransactionRecord::new("Tamil Nadu", 2021, 1, "PhonePe", 140_000, 19_000_000.0),
            TransactionRecord::new("Gujarat", 2021, 1, "Google Pay", 110_000, 16_000_000.0),
        ])
    }

    /// All records in load order
    pub fn records(&self) -> &[TransactionRecord] {
        &self.records
    }

    /// Distinct brand values, first occurrence wins
    pub fn brands(&self) -> &[String] {
        &self.brands
    }

    pub fn contains_brand(&self, brand: &str) -> bool {
        self.brands.iter().any(|b| b == brand)
    }

    /// Records whose brand equals `brand`, in dataset order
    pub fn filter_by_brand<'a>(
        &'a self,
        brand: &'a str,
    ) -> impl Iterator<Item = &'a TransactionRecord> + 'a {
        self.records.iter().filter(move |r| r.is_brand(brand))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for Dataset {
    fn default() -> Self {
        Self::sample()
    }
}
