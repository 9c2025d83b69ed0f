//! Matcher error types
//!
//! Error codes:
//! - MOF_INVALID_CRITERIA (user correctable)
//! - MOF_UNKNOWN_COLUMN (user correctable)
//! - MOF_SCHEMA_MISMATCH
//!
//! A record that cannot be coerced for a predicate is not an error; it
//! simply does not match.

use std::fmt;

/// Matcher-specific error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchErrorCode {
    /// No usable criteria after normalization
    InvalidCriteria,
    /// One or more criteria name columns absent from the dataset
    UnknownColumn,
    /// Dataset or match schema is not usable for grouping
    SchemaMismatch,
}

impl MatchErrorCode {
    /// Returns the string code
    pub fn code(&self) -> &'static str {
        match self {
            MatchErrorCode::InvalidCriteria => "MOF_INVALID_CRITERIA",
            MatchErrorCode::UnknownColumn => "MOF_UNKNOWN_COLUMN",
            MatchErrorCode::SchemaMismatch => "MOF_SCHEMA_MISMATCH",
        }
    }

    /// Returns true if the caller should ask the user to correct the input
    pub fn is_user_correctable(&self) -> bool {
        matches!(
            self,
            MatchErrorCode::InvalidCriteria | MatchErrorCode::UnknownColumn
        )
    }
}

impl fmt::Display for MatchErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Matcher error with full context
#[derive(Debug, Clone, PartialEq)]
pub struct MatchError {
    code: MatchErrorCode,
    message: String,
    /// Offending column names, in criteria order
    columns: Vec<String>,
}

impl MatchError {
    /// No criteria survived normalization
    pub fn no_criteria() -> Self {
        Self {
            code: MatchErrorCode::InvalidCriteria,
            message: "no criteria supplied; provide at least one non-empty value".to_string(),
            columns: Vec::new(),
        }
    }

    /// Criteria refer to columns missing from the dataset.
    ///
    /// All offending columns are reported together.
    pub fn unknown_columns(columns: Vec<String>) -> Self {
        let quoted: Vec<String> = columns.iter().map(|c| format!("'{}'", c)).collect();
        Self {
            code: MatchErrorCode::UnknownColumn,
            message: format!("Missing columns in dataset: [{}]", quoted.join(", ")),
            columns,
        }
    }

    /// Dataset or schema cannot support matching
    pub fn schema_mismatch(reason: impl Into<String>) -> Self {
        Self {
            code: MatchErrorCode::SchemaMismatch,
            message: reason.into(),
            columns: Vec::new(),
        }
    }

    /// Returns the error code
    pub fn code(&self) -> MatchErrorCode {
        self.code
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the offending columns (empty unless UnknownColumn)
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn is_user_correctable(&self) -> bool {
        self.code.is_user_correctable()
    }
}

impl fmt::Display for MatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for MatchError {}

/// Result type for matcher operations
pub type MatchResult<T> = Result<T, MatchError>;
