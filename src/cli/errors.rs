//! CLI-specific error types
//!
//! Matcher errors keep their own code when surfaced through the CLI, so a
//! caller can tell "fix your input" apart from "nothing matched" and from
//! environment failures.

use std::fmt;
use std::io;

use crate::dataset::DatasetError;
use crate::export::ExportError;
use crate::matcher::MatchError;

/// CLI error codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Configuration file error
    ConfigError,
    /// I/O error (stdin/stdout/output file)
    IoError,
    /// Dataset could not be loaded
    DatasetError,
    /// Malformed command-line input
    UsageError,
    /// Matching failed; carries the matcher's code
    Match(&'static str),
}

impl CliErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigError => "MOF_CLI_CONFIG_ERROR",
            Self::IoError => "MOF_CLI_IO_ERROR",
            Self::DatasetError => "MOF_CLI_DATASET_ERROR",
            Self::UsageError => "MOF_CLI_USAGE_ERROR",
            Self::Match(code) => code,
        }
    }
}

/// CLI error
#[derive(Debug)]
pub struct CliError {
    code: CliErrorCode,
    message: String,
}

impl CliError {
    /// Create a new CLI error
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Config error
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ConfigError, msg)
    }

    /// I/O error
    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::IoError, msg)
    }

    /// Dataset error
    pub fn dataset_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::DatasetError, msg)
    }

    /// Usage error
    pub fn usage_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::UsageError, msg)
    }

    /// No dataset path on the command line or in the config
    pub fn no_dataset() -> Self {
        Self::usage_error("No dataset given. Pass --dataset or set dataset_path in the config.")
    }

    /// Get the error code
    pub fn code(&self) -> &CliErrorCode {
        &self.code
    }

    /// Get the error code string
    pub fn code_str(&self) -> &'static str {
        self.code.code()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for CliError {}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::io_error(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::io_error(format!("JSON error: {}", e))
    }
}

impl From<DatasetError> for CliError {
    fn from(e: DatasetError) -> Self {
        Self::dataset_error(e.to_string())
    }
}

impl From<ExportError> for CliError {
    fn from(e: ExportError) -> Self {
        Self::io_error(format!("Export failed: {}", e))
    }
}

impl From<MatchError> for CliError {
    fn from(e: MatchError) -> Self {
        Self::new(CliErrorCode::Match(e.code().code()), e.message())
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_error_keeps_code() {
        let err: CliError = MatchError::unknown_columns(vec!["Foo".into()]).into();
        assert_eq!(err.code_str(), "MOF_UNKNOWN_COLUMN");
        assert!(err.message().contains("Foo"));
    }

    #[test]
    fn test_display() {
        let err = CliError::config_error("bad delimiter");
        assert_eq!(err.to_string(), "MOF_CLI_CONFIG_ERROR: bad delimiter");
    }

    #[test]
    fn test_dataset_error_conversion() {
        let err: CliError = DatasetError::EmptyHeader.into();
        assert_eq!(err.code(), &CliErrorCode::DatasetError);
    }
}
