//! Dataset construction and loading errors

use thiserror::Error;

/// Result type for dataset operations
pub type DatasetResult<T> = Result<T, DatasetError>;

/// Errors raised while building or loading a dataset
#[derive(Debug, Error)]
pub enum DatasetError {
    /// Header row absent or empty
    #[error("dataset has no header row")]
    EmptyHeader,

    /// Two columns share a name after trimming
    #[error("duplicate column in dataset header: '{0}'")]
    DuplicateColumn(String),

    /// A row is wider or narrower than the header
    #[error("row {row} has {found} values, expected {expected}")]
    RowWidth {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Delimited input could not be parsed
    #[error("csv parse error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON table could not be parsed
    #[error("json parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
