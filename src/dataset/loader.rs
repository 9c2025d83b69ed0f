//! Dataset loading from local files
//!
//! Two formats are accepted:
//! - CSV with a header row (delimiter configurable)
//! - a JSON table `{"columns": [...], "rows": [[...], ...]}`
//!
//! Header names are trimmed. CSV cells are classified with
//! [`CellValue::from_raw`]; JSON cells keep their JSON type (null is missing).

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;

use super::errors::{DatasetError, DatasetResult};
use super::record::Dataset;
use super::value::CellValue;

/// On-disk JSON table layout
#[derive(Debug, Deserialize)]
struct JsonTable {
    columns: Vec<String>,
    rows: Vec<Vec<CellValue>>,
}

/// Loads datasets from CSV or JSON sources
#[derive(Debug, Clone, Copy)]
pub struct DatasetLoader {
    delimiter: u8,
}

impl Default for DatasetLoader {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

impl DatasetLoader {
    /// Creates a loader with the default comma delimiter
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the CSV field delimiter
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Loads a dataset, choosing the format by file extension.
    ///
    /// `.json` selects the JSON table format; anything else is read as CSV.
    pub fn load_path(&self, path: &Path) -> DatasetResult<Dataset> {
        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        if is_json {
            self.from_json_path(path)
        } else {
            self.from_csv_path(path)
        }
    }

    /// Loads a CSV file
    pub fn from_csv_path(&self, path: &Path) -> DatasetResult<Dataset> {
        let file = File::open(path)?;
        self.from_csv_reader(BufReader::new(file))
    }

    /// Loads CSV from any reader. The first row is the header.
    pub fn from_csv_reader<R: Read>(&self, reader: R) -> DatasetResult<Dataset> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let header: Vec<String> = csv_reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();
        if header.iter().all(|h| h.is_empty()) {
            return Err(DatasetError::EmptyHeader);
        }

        let mut dataset = Dataset::new(header)?;
        for record in csv_reader.records() {
            let record = record?;
            let values = record.iter().map(CellValue::from_raw).collect();
            dataset.push(values)?;
        }

        Ok(dataset)
    }

    /// Loads a JSON table file
    pub fn from_json_path(&self, path: &Path) -> DatasetResult<Dataset> {
        let file = File::open(path)?;
        self.from_json_reader(BufReader::new(file))
    }

    /// Loads a JSON table from any reader
    pub fn from_json_reader<R: Read>(&self, reader: R) -> DatasetResult<Dataset> {
        let table: JsonTable = serde_json::from_reader(reader)?;

        let columns: Vec<String> = table.columns.iter().map(|c| c.trim().to_string()).collect();
        let mut dataset = Dataset::new(columns)?;
        for row in table.rows {
            dataset.push(row)?;
        }

        Ok(dataset)
    }
}
