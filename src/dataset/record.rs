//! Records and datasets
//!
//! A dataset owns a fixed, ordered column list and a sequence of records
//! aligned to it. Columns are addressed by name through a lookup table
//! built once at construction.

use std::collections::HashMap;

use super::errors::{DatasetError, DatasetResult};
use super::value::CellValue;

static MISSING: CellValue = CellValue::Missing;

/// One observation of an entity, aligned to its dataset's columns
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    values: Vec<CellValue>,
}

impl Record {
    /// Creates a record from values in column order
    pub fn new(values: Vec<CellValue>) -> Self {
        Self { values }
    }

    /// Returns the value at a column position, missing if out of range
    pub fn get(&self, index: usize) -> &CellValue {
        self.values.get(index).unwrap_or(&MISSING)
    }

    /// Returns all values in column order
    pub fn values(&self) -> &[CellValue] {
        &self.values
    }
}

/// An ordered collection of records sharing one column schema
#[derive(Debug, Clone)]
pub struct Dataset {
    columns: Vec<String>,
    index: HashMap<String, usize>,
    records: Vec<Record>,
}

impl Dataset {
    /// Creates an empty dataset with the given columns.
    ///
    /// Rejects an empty header and duplicate column names.
    pub fn new<I, S>(columns: I) -> DatasetResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let columns: Vec<String> = columns.into_iter().map(Into::into).collect();
        if columns.is_empty() {
            return Err(DatasetError::EmptyHeader);
        }

        let mut index = HashMap::with_capacity(columns.len());
        for (i, name) in columns.iter().enumerate() {
            if index.insert(name.clone(), i).is_some() {
                return Err(DatasetError::DuplicateColumn(name.clone()));
            }
        }

        Ok(Self {
            columns,
            index,
            records: Vec::new(),
        })
    }

    /// Appends a record given its values in column order
    pub fn push(&mut self, values: Vec<CellValue>) -> DatasetResult<()> {
        if values.len() != self.columns.len() {
            return Err(DatasetError::RowWidth {
                row: self.records.len() + 1,
                expected: self.columns.len(),
                found: values.len(),
            });
        }
        self.records.push(Record::new(values));
        Ok(())
    }

    /// Builder-style variant of [`Dataset::push`]
    pub fn with_row(mut self, values: Vec<CellValue>) -> DatasetResult<Self> {
        self.push(values)?;
        Ok(self)
    }

    /// Returns the column names in schema order
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Returns the position of a column, if it exists
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Returns true if the schema contains the column
    pub fn has_column(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Returns the records in dataset order
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Returns at most the first `n` records
    pub fn head(&self, n: usize) -> &[Record] {
        &self.records[..n.min(self.records.len())]
    }

    /// Looks up a record's value by column name
    pub fn value<'a>(&self, record: &'a Record, column: &str) -> Option<&'a CellValue> {
        self.column_index(column).map(|i| record.get(i))
    }

    /// Returns the number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the dataset holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
