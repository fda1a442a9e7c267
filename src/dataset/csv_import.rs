//! CSV Import
//!
//! Loads an aggregated-user table exported as CSV into a [`Dataset`].
//! Expected headers: `State,Year,Quarter,Brand,Transaction_count,Transaction_amount`
//! (snake_case headers are accepted too).

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use super::{Dataset, DatasetError, DatasetResult, TransactionRecord};

/// Largest amount accepted for a single row or a brand's running total (1e18 INR)
pub const MAX_TRANSACTION_AMOUNT: f64 = 1e18;

impl Dataset {
    /// Load a dataset from a CSV file on disk
    pub fn from_csv_path(path: impl AsRef<Path>) -> DatasetResult<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let dataset = Self::from_csv_reader(file)?;
        tracing::info!(
            path = %path.display(),
            records = dataset.len(),
            brands = dataset.brands().len(),
            "Loaded dataset from CSV"
        );
        Ok(dataset)
    }

    /// Load a dataset from any CSV source with a header row
    pub fn from_csv_reader<R: Read>(reader: R) -> DatasetResult<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut records = Vec::new();
        // Per-brand (count, amount) totals; every brand summary must stay representable
        let mut totals: HashMap<String, (u64, f64)> = HashMap::new();
        for (idx, result) in reader.deserialize::<TransactionRecord>().enumerate() {
            // Rows are 1-based and the header occupies row 1
            let row = idx + 2;
            let record = result.map_err(|e| DatasetError::Csv {
                row,
                message: e.to_string(),
            })?;
            validate_record(&record, row)?;
            accumulate_brand_total(&mut totals, &record, row)?;
            records.push(record);
        }

        if records.is_empty() {
            return Err(DatasetError::Empty);
        }

        Ok(Self::new(records))
    }
}

fn validate_record(record: &TransactionRecord, row: usize) -> DatasetResult<()> {
    if !(1..=4).contains(&record.quarter) {
        return Err(DatasetError::Invalid {
            row,
            message: format!("quarter must be between 1 and 4, got {}", record.quarter),
        });
    }

    if !record.transaction_amount.is_finite()
        || record.transaction_amount < 0.0
        || record.transaction_amount > MAX_TRANSACTION_AMOUNT
    {
        return Err(DatasetError::Invalid {
            row,
            message: format!(
                "transaction amount must be between 0 and {:e}, got {}",
                MAX_TRANSACTION_AMOUNT, record.transaction_amount
            ),
        });
    }

    if record.brand.is_empty() {
        return Err(DatasetError::Invalid {
            row,
            message: "brand must not be empty".to_string(),
        });
    }

    Ok(())
}

fn accumulate_brand_total(
    totals: &mut HashMap<String, (u64, f64)>,
    record: &TransactionRecord,
    row: usize,
) -> DatasetResult<()> {
    let (count, amount) = totals.entry(record.brand.clone()).or_insert((0, 0.0));

    *count = count
        .checked_add(record.transaction_count)
        .ok_or_else(|| DatasetError::Invalid {
            row,
            message: format!("total transaction count for {} overflows", record.brand),
        })?;

    *amount += record.transaction_amount;
    if *amount > MAX_TRANSACTION_AMOUNT {
        return Err(DatasetError::Invalid {
            row,
            message: format!(
                "total transaction amount for {} exceeds {:e}",
                record.brand, MAX_TRANSACTION_AMOUNT
            ),
        });
    }

    Ok(())
}
