//! Configuration file
//!
//! JSON, every field optional:
//!
//! ```json
//! {
//!   "dataset_path": "data/mofs.csv",
//!   "csv_delimiter": ",",
//!   "preview_rows": 20,
//!   "schema": { "entity_column": "MOF", "primary_column": "Gas uptake (mmol/g)" }
//! }
//! ```
//!
//! A missing file at the default location means all defaults; a missing file
//! at an explicitly chosen location is an error.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::matcher::MatchSchema;

use super::errors::{CliError, CliResult};

/// Default config location
pub const DEFAULT_CONFIG_PATH: &str = "./mofmatch.json";

/// Configuration file structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Dataset file used when `--dataset` is not given
    #[serde(default)]
    pub dataset_path: Option<PathBuf>,

    /// CSV field delimiter, a single ASCII character (default ",")
    #[serde(default = "default_csv_delimiter")]
    pub csv_delimiter: String,

    /// Records shown by `preview` (default 20)
    #[serde(default = "default_preview_rows")]
    pub preview_rows: usize,

    /// Column roles (default: MOF adsorption schema)
    #[serde(default)]
    pub schema: MatchSchema,
}

fn default_csv_delimiter() -> String {
    ",".to_string()
}

fn default_preview_rows() -> usize {
    20
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dataset_path: None,
            csv_delimiter: default_csv_delimiter(),
            preview_rows: default_preview_rows(),
            schema: MatchSchema::default(),
        }
    }
}

impl Config {
    /// Load configuration from file.
    ///
    /// The default path may be absent; any other path must exist.
    pub fn load(path: &Path) -> CliResult<Self> {
        if !path.exists() && path == Path::new(DEFAULT_CONFIG_PATH) {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        Self::from_json(&content)
    }

    /// Parse and validate configuration from a JSON string
    pub fn from_json(content: &str) -> CliResult<Self> {
        let config: Config = serde_json::from_str(content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> CliResult<()> {
        self.delimiter()?;

        if self.preview_rows == 0 {
            return Err(CliError::config_error("preview_rows must be > 0"));
        }

        self.schema
            .validate()
            .map_err(|e| CliError::config_error(format!("Schema config error: {}", e.message())))?;

        Ok(())
    }

    /// Returns the delimiter as a byte
    pub fn delimiter(&self) -> CliResult<u8> {
        match self.csv_delimiter.as_bytes() {
            [b] if b.is_ascii() => Ok(*b),
            _ => Err(CliError::config_error(format!(
                "Invalid csv_delimiter: '{}'. Must be a single ASCII character.",
                self.csv_delimiter
            ))),
        }
    }

    /// Resolves the dataset path, preferring the command-line value
    pub fn dataset_path(&self, cli_value: Option<&Path>) -> CliResult<PathBuf> {
        cli_value
            .map(Path::to_path_buf)
            .or_else(|| self.dataset_path.clone())
            .ok_or_else(CliError::no_dataset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::CliErrorCode;

    #[test]
    fn test_empty_object_gives_defaults() {
        let config = Config::from_json("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.delimiter().unwrap(), b',');
        assert_eq!(config.preview_rows, 20);
    }

    #[test]
    fn test_semicolon_delimiter() {
        let config = Config::from_json(r#"{"csv_delimiter": ";"}"#).unwrap();
        assert_eq!(config.delimiter().unwrap(), b';');
    }

    #[test]
    fn test_multi_char_delimiter_rejected() {
        let err = Config::from_json(r#"{"csv_delimiter": ";;"}"#).unwrap_err();
        assert_eq!(err.code(), &CliErrorCode::ConfigError);
    }

    #[test]
    fn test_zero_preview_rows_rejected() {
        assert!(Config::from_json(r#"{"preview_rows": 0}"#).is_err());
    }

    #[test]
    fn test_invalid_schema_rejected() {
        let err = Config::from_json(r#"{"schema": {"primary_column": "Void Fraction"}}"#)
            .unwrap_err();
        assert!(err.message().contains("primary column"));
    }

    #[test]
    fn test_dataset_path_resolution() {
        let config = Config::from_json(r#"{"dataset_path": "a.csv"}"#).unwrap();
        assert_eq!(config.dataset_path(None).unwrap(), PathBuf::from("a.csv"));
        assert_eq!(
            config.dataset_path(Some(Path::new("b.csv"))).unwrap(),
            PathBuf::from("b.csv")
        );
        assert!(Config::default().dataset_path(None).is_err());
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let err = Config::load(Path::new("/nonexistent/mofmatch.json")).unwrap_err();
        assert_eq!(err.code(), &CliErrorCode::ConfigError);
    }
}
