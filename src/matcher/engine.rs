//! Match pipeline
//!
//! Strict order:
//! 1. Normalize criteria (reject if empty)
//! 2. Build predicates (reject unknown columns, all at once)
//! 3. Bind the entity column
//! 4. Filter records
//! 5. Group and reduce
//! 6. Assemble the output table
//!
//! The pipeline is pure: it borrows the dataset, performs no I/O and keeps
//! no state between calls.

use crate::dataset::Dataset;

use super::aggregate::GroupAggregator;
use super::assemble::{OutputAssembler, OutputTable};
use super::criteria::{CriteriaNormalizer, RawCriteria};
use super::errors::MatchResult;
use super::filter::RecordFilter;
use super::predicate::PredicateBuilder;
use super::schema::MatchSchema;

/// Matches criteria against datasets under one schema
#[derive(Debug, Clone)]
pub struct Matcher {
    schema: MatchSchema,
}

impl Default for Matcher {
    fn default() -> Self {
        Self {
            schema: MatchSchema::mof(),
        }
    }
}

impl Matcher {
    /// Creates a matcher after validating the schema
    pub fn new(schema: MatchSchema) -> MatchResult<Self> {
        schema.validate()?;
        Ok(Self { schema })
    }

    /// Returns the schema
    pub fn schema(&self) -> &MatchSchema {
        &self.schema
    }

    /// Runs the full pipeline.
    ///
    /// An empty table (with the full output schema) means no matches; errors
    /// are reserved for unusable criteria or datasets.
    pub fn find_matches(&self, dataset: &Dataset, raw: &RawCriteria) -> MatchResult<OutputTable> {
        let criteria = CriteriaNormalizer::normalize(raw)?;
        let predicates = PredicateBuilder::build(&criteria, dataset)?;
        let aggregator = GroupAggregator::new(&self.schema, dataset)?;

        let matched = RecordFilter::apply(dataset, &predicates);
        if matched.is_empty() {
            return Ok(OutputTable::empty(&self.schema));
        }

        let rows = aggregator.aggregate(&matched);
        Ok(OutputAssembler::assemble(&self.schema, rows))
    }
}

/// Matches against the default MOF schema
pub fn find_matches(dataset: &Dataset, raw: &RawCriteria) -> MatchResult<OutputTable> {
    Matcher::default().find_matches(dataset, raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::CellValue;
    use crate::matcher::MatchErrorCode;

    fn dataset() -> Dataset {
        Dataset::new(["MOF", "N2", "Gas uptake (mmol/g)", "PLD (Å)"])
            .unwrap()
            .with_row(vec!["ZIF-8".into(), 0.5.into(), 2.0.into(), 3.0.into()])
            .unwrap()
            .with_row(vec!["ZIF-8".into(), 0.5.into(), 4.0.into(), 4.0.into()])
            .unwrap()
            .with_row(vec!["UiO-66".into(), 0.9.into(), 1.0.into(), 6.0.into()])
            .unwrap()
    }

    #[test]
    fn test_pipeline_end_to_end() {
        let ds = dataset();
        let table = find_matches(&ds, &RawCriteria::new().with_text("N2", "0.5")).unwrap();

        assert_eq!(table.len(), 1);
        assert_eq!(table.get(0, "MOF"), Some(&CellValue::text("ZIF-8")));
        assert_eq!(table.get(0, "Gas uptake (mmol/g)"), Some(&CellValue::Number(4.0)));
        assert_eq!(table.get(0, "PLD (Å)"), Some(&CellValue::Number(3.5)));
        assert_eq!(table.get(0, "KH (mmol/bar.g)"), Some(&CellValue::Missing));
    }

    #[test]
    fn test_no_matches_returns_empty_schema() {
        let ds = dataset();
        let table = find_matches(&ds, &RawCriteria::new().with_text("MOF", "HKUST-1")).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.columns().len(), MatchSchema::mof().output_columns.len());
    }

    #[test]
    fn test_empty_criteria_before_column_check() {
        let ds = dataset();
        let err = find_matches(&ds, &RawCriteria::new().with_text("Nope", " ")).unwrap_err();
        assert_eq!(err.code(), MatchErrorCode::InvalidCriteria);
    }

    #[test]
    fn test_empty_dataset_still_validates_columns() {
        let ds = Dataset::new(["MOF"]).unwrap();
        let err = find_matches(&ds, &RawCriteria::new().with_text("N2", "1")).unwrap_err();
        assert_eq!(err.code(), MatchErrorCode::UnknownColumn);

        let table = find_matches(&ds, &RawCriteria::new().with_text("MOF", "A")).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_invalid_schema_rejected() {
        let mut schema = MatchSchema::mof();
        schema.output_columns.clear();
        assert!(Matcher::new(schema).is_err());
    }

    #[test]
    fn test_does_not_mutate_dataset() {
        let ds = dataset();
        let before = ds.records().to_vec();
        let _ = find_matches(&ds, &RawCriteria::new().with_text("MOF", "zif-8")).unwrap();
        assert_eq!(ds.records(), before.as_slice());
    }
}
