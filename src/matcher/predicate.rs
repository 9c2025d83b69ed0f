//! Per-column predicates
//!
//! Each normalized criterion becomes one predicate over one column:
//! - text: trimmed, lower-cased equality against the rendered cell
//! - numeric: inclusive ±2% band around the criterion value
//!
//! Cells that cannot be rendered or coerced never match.

use crate::dataset::{Dataset, Record};

use super::criteria::{CriterionValue, NormalizedCriteria};
use super::errors::{MatchError, MatchResult};

/// Lower band factor applied to a numeric criterion
pub const LOWER_FACTOR: f64 = 0.98;

/// Upper band factor applied to a numeric criterion
pub const UPPER_FACTOR: f64 = 1.02;

/// Inclusive numeric band
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToleranceBand {
    pub lower: f64,
    pub upper: f64,
}

impl ToleranceBand {
    /// Band around `value`, computed as `[value * 0.98, value * 1.02]`.
    ///
    /// Negative values give an inverted band that contains nothing.
    pub fn around(value: f64) -> Self {
        Self {
            lower: value * LOWER_FACTOR,
            upper: value * UPPER_FACTOR,
        }
    }

    /// Inclusive containment
    pub fn contains(&self, x: f64) -> bool {
        self.lower <= x && x <= self.upper
    }

    /// Returns true if no value can fall inside the band
    pub fn is_inverted(&self) -> bool {
        self.lower > self.upper
    }
}

/// Matching rule of a single predicate
#[derive(Debug, Clone, PartialEq)]
pub enum MatchRule {
    /// Folded text equality; holds the folded criterion
    TextEquals(String),
    /// Coerced value within the band
    WithinBand(ToleranceBand),
}

/// A matching rule bound to one dataset column
#[derive(Debug, Clone, PartialEq)]
pub struct Predicate {
    column_index: usize,
    rule: MatchRule,
}

impl Predicate {
    /// Evaluates the predicate against a record
    pub fn matches(&self, record: &Record) -> bool {
        let cell = record.get(self.column_index);
        match &self.rule {
            MatchRule::TextEquals(expected) => match cell.render_text() {
                Some(text) => fold(&text) == *expected,
                None => false,
            },
            MatchRule::WithinBand(band) => match cell.as_number() {
                Some(n) => band.contains(n),
                None => false,
            },
        }
    }
}

fn fold(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Turns normalized criteria into predicates
pub struct PredicateBuilder;

impl PredicateBuilder {
    /// Builds one predicate per criterion.
    ///
    /// Every criterion column must exist in the dataset; all unknown columns
    /// are reported in one error.
    pub fn build(criteria: &NormalizedCriteria, dataset: &Dataset) -> MatchResult<Vec<Predicate>> {
        let missing: Vec<String> = criteria
            .iter()
            .filter(|c| !dataset.has_column(&c.column))
            .map(|c| c.column.clone())
            .collect();
        if !missing.is_empty() {
            return Err(MatchError::unknown_columns(missing));
        }

        let mut predicates = Vec::with_capacity(criteria.len());
        for criterion in criteria.iter() {
            let column_index = dataset
                .column_index(&criterion.column)
                .ok_or_else(|| MatchError::unknown_columns(vec![criterion.column.clone()]))?;

            let rule = match &criterion.value {
                CriterionValue::Text(s) => MatchRule::TextEquals(fold(s)),
                CriterionValue::Numeric(v) => MatchRule::WithinBand(ToleranceBand::around(*v)),
            };

            predicates.push(Predicate {
                column_index,
                rule,
            });
        }

        Ok(predicates)
    }
}
