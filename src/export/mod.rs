//! Result export
//!
//! Writes output tables as CSV: a header row with the output columns, then
//! one line per entity. Missing cells are written as empty fields.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use thiserror::Error;

use crate::matcher::OutputTable;

/// Errors raised while exporting a table
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("csv write error: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Writes output tables as delimited text
#[derive(Debug, Clone, Copy)]
pub struct CsvExporter {
    delimiter: u8,
}

impl Default for CsvExporter {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

impl CsvExporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the field delimiter
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Writes the table to any writer
    pub fn write<W: Write>(&self, table: &OutputTable, writer: W) -> Result<(), ExportError> {
        let mut csv_writer = csv::WriterBuilder::new()
            .delimiter(self.delimiter)
            .from_writer(writer);

        csv_writer.write_record(table.columns())?;
        for row in table.rows() {
            csv_writer.write_record(row.values().iter().map(|v| v.to_string()))?;
        }
        csv_writer.flush()?;

        Ok(())
    }

    /// Writes the table to a file, replacing it if it exists
    pub fn write_path(&self, table: &OutputTable, path: &Path) -> Result<(), ExportError> {
        let file = File::create(path)?;
        self.write(table, file)
    }

    /// Renders the table to a string
    pub fn render(&self, table: &OutputTable) -> Result<String, ExportError> {
        let mut buffer = Vec::new();
        self.write(table, &mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::CellValue;
    use crate::matcher::{MatchSchema, OutputAssembler, OutputRow};

    fn table() -> OutputTable {
        let mut schema = MatchSchema::mof();
        schema.output_columns = vec!["MOF".into(), "N2".into(), "PLD (Å)".into()];
        OutputAssembler::assemble(
            &schema,
            vec![OutputRow::new(vec![
                "ZIF-8, activated".into(),
                0.5.into(),
                CellValue::Missing,
            ])],
        )
    }

    #[test]
    fn test_csv_layout() {
        let out = CsvExporter::new().render(&table()).unwrap();
        assert_eq!(out, "MOF,N2,PLD (Å)\n\"ZIF-8, activated\",0.5,\n");
    }

    #[test]
    fn test_empty_table_writes_header() {
        let out = CsvExporter::new()
            .render(&OutputTable::empty(&MatchSchema::mof()))
            .unwrap();
        assert_eq!(out.lines().count(), 1);
        assert!(out.starts_with("MOF,KH (mmol/bar.g),W 0.1 (mmol/g)"));
    }

    #[test]
    fn test_custom_delimiter() {
        let out = CsvExporter::new().with_delimiter(b';').render(&table()).unwrap();
        assert!(out.starts_with("MOF;N2;PLD (Å)\n"));
    }
}
