//! Grouping and reduction of matched records
//!
//! Matched records are bucketed by entity identity. Buckets are visited in
//! ascending identity order. A bucket of one record is projected as-is; a
//! larger bucket keeps the operating conditions of its representative (the
//! record with the highest primary value, first one on ties) and averages
//! every other output column.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::dataset::{CellValue, Dataset, Record};

use super::assemble::OutputRow;
use super::errors::{MatchError, MatchResult};
use super::schema::MatchSchema;

/// Grouping key; numbers sort before text
#[derive(Debug, Clone)]
enum Identity {
    Number(f64),
    Text(String),
}

impl Identity {
    /// Missing identities are not grouped
    fn of(cell: &CellValue) -> Option<Self> {
        match cell {
            // -0.0 and 0.0 name the same entity
            CellValue::Number(n) if *n == 0.0 => Some(Identity::Number(0.0)),
            CellValue::Number(n) if n.is_nan() => None,
            CellValue::Number(n) => Some(Identity::Number(*n)),
            CellValue::Text(s) => Some(Identity::Text(s.clone())),
            CellValue::Missing => None,
        }
    }

    fn into_cell(self) -> CellValue {
        match self {
            Identity::Number(n) => CellValue::Number(n),
            Identity::Text(s) => CellValue::Text(s),
        }
    }
}

impl PartialEq for Identity {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Identity {}

impl PartialOrd for Identity {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Identity {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Identity::Number(a), Identity::Number(b)) => a.total_cmp(b),
            (Identity::Number(_), Identity::Text(_)) => Ordering::Less,
            (Identity::Text(_), Identity::Number(_)) => Ordering::Greater,
            (Identity::Text(a), Identity::Text(b)) => a.cmp(b),
        }
    }
}

/// Reduces matched records to one output row per entity
pub struct GroupAggregator<'a> {
    schema: &'a MatchSchema,
    /// Dataset position of each output column, `None` if absent
    projection: Vec<Option<usize>>,
    entity_index: usize,
    primary_index: Option<usize>,
}

impl<'a> GroupAggregator<'a> {
    /// Binds the schema to a dataset's columns.
    ///
    /// Fails if the dataset has no entity column.
    pub fn new(schema: &'a MatchSchema, dataset: &Dataset) -> MatchResult<Self> {
        let entity_index = dataset.column_index(&schema.entity_column).ok_or_else(|| {
            MatchError::schema_mismatch(format!(
                "dataset has no entity column '{}'",
                schema.entity_column
            ))
        })?;

        let projection = schema
            .output_columns
            .iter()
            .map(|c| dataset.column_index(c))
            .collect();

        Ok(Self {
            schema,
            projection,
            entity_index,
            primary_index: dataset.column_index(&schema.primary_column),
        })
    }

    /// Groups and reduces matched records, in ascending identity order
    pub fn aggregate(&self, matched: &[&Record]) -> Vec<OutputRow> {
        self.group(matched)
            .into_iter()
            .map(|(identity, group)| self.reduce(identity, &group))
            .collect()
    }

    fn group<'r>(&self, matched: &[&'r Record]) -> BTreeMap<Identity, Vec<&'r Record>> {
        let mut buckets: BTreeMap<Identity, Vec<&'r Record>> = BTreeMap::new();
        for record in matched {
            if let Some(identity) = Identity::of(record.get(self.entity_index)) {
                buckets.entry(identity).or_default().push(*record);
            }
        }
        buckets
    }

    fn reduce(&self, identity: Identity, group: &[&Record]) -> OutputRow {
        if let [single] = group {
            return self.project(single);
        }

        let representative = group[self.representative(group)];
        let entity = identity.into_cell();

        let values = self
            .schema
            .output_columns
            .iter()
            .zip(&self.projection)
            .map(|(column, index)| {
                let Some(index) = *index else {
                    return CellValue::Missing;
                };
                if index == self.entity_index {
                    entity.clone()
                } else if self.schema.is_operating(column) {
                    representative.get(index).clone()
                } else {
                    mean(group, index)
                }
            })
            .collect();

        OutputRow::new(values)
    }

    fn project(&self, record: &Record) -> OutputRow {
        let values = self
            .projection
            .iter()
            .map(|index| match index {
                Some(i) => record.get(*i).clone(),
                None => CellValue::Missing,
            })
            .collect();
        OutputRow::new(values)
    }

    /// Position of the record with the highest primary value.
    ///
    /// Strictly-greater scan, so the first maximum wins. Records without a
    /// numeric primary value are skipped; if none has one, the first record
    /// is used.
    fn representative(&self, group: &[&Record]) -> usize {
        let Some(primary) = self.primary_index else {
            return 0;
        };

        let mut best: Option<(usize, f64)> = None;
        for (i, record) in group.iter().enumerate() {
            let Some(value) = record.get(primary).as_number() else {
                continue;
            };
            match best {
                Some((_, max)) if value <= max => {}
                _ => best = Some((i, value)),
            }
        }

        best.map(|(i, _)| i).unwrap_or(0)
    }
}

/// Mean of the coerced numeric values in a column; missing if there are none
fn mean(group: &[&Record], index: usize) -> CellValue {
    let mut sum = 0.0;
    let mut count = 0usize;
    for record in group {
        if let Some(n) = record.get(index).as_number() {
            sum += n;
            count += 1;
        }
    }

    if count == 0 {
        CellValue::Missing
    } else {
        CellValue::Number(sum / count as f64)
    }
}
