//! Output rows and tables
//!
//! Every output table carries the full output column list, in schema order,
//! whether or not any rows matched.

use serde::{Deserialize, Serialize};

use crate::dataset::CellValue;

use super::schema::MatchSchema;

/// One aggregated row, aligned to the output columns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OutputRow {
    values: Vec<CellValue>,
}

impl OutputRow {
    /// Creates a row from values in output column order
    pub fn new(values: Vec<CellValue>) -> Self {
        Self { values }
    }

    /// Returns the values in output column order
    pub fn values(&self) -> &[CellValue] {
        &self.values
    }
}

/// The result of a match: one row per matched entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputTable {
    columns: Vec<String>,
    rows: Vec<OutputRow>,
}

impl OutputTable {
    /// Creates an empty table with the schema's output columns
    pub fn empty(schema: &MatchSchema) -> Self {
        Self {
            columns: schema.output_columns.clone(),
            rows: Vec::new(),
        }
    }

    /// Returns the column names in output order
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Returns the rows in entity order
    pub fn rows(&self) -> &[OutputRow] {
        &self.rows
    }

    /// Looks up a cell by row position and column name
    pub fn get(&self, row: usize, column: &str) -> Option<&CellValue> {
        let col = self.columns.iter().position(|c| c == column)?;
        self.rows.get(row).and_then(|r| r.values.get(col))
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Builds output tables
pub struct OutputAssembler;

impl OutputAssembler {
    /// Concatenates rows under the schema's output columns.
    ///
    /// Rows are expected to be aligned to `schema.output_columns`; short rows
    /// are padded with missing values.
    pub fn assemble(schema: &MatchSchema, rows: Vec<OutputRow>) -> OutputTable {
        let width = schema.output_columns.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.values.resize(width, CellValue::Missing);
                row
            })
            .collect();

        OutputTable {
            columns: schema.output_columns.clone(),
            rows,
        }
    }
}
