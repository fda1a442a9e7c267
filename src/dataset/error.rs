//! Dataset error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a dataset
#[derive(Error, Debug)]
pub enum DatasetError {
    /// Could not open or read the source file
    #[error("Failed to read dataset {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A CSV row could not be decoded
    #[error("CSV error at row {row}: {message}")]
    Csv { row: usize, message: String },

    /// A row decoded but holds values outside the table's domain
    #[error("Invalid record at row {row}: {message}")]
    Invalid { row: usize, message: String },

    /// The source had a header but no rows
    #[error("Dataset is empty")]
    Empty,
}

/// Result type alias for dataset operations
pub type DatasetResult<T> = Result<T, DatasetError>;
