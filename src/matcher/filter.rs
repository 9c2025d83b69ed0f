//! Record filtering
//!
//! Conjunction of all predicates, evaluated record by record.

use crate::dataset::{Dataset, Record};

use super::predicate::Predicate;

/// Applies predicates to a dataset
pub struct RecordFilter;

impl RecordFilter {
    /// Checks if a record satisfies every predicate
    pub fn matches(record: &Record, predicates: &[Predicate]) -> bool {
        predicates.iter().all(|pred| pred.matches(record))
    }

    /// Returns the matching records in dataset order
    pub fn apply<'a>(dataset: &'a Dataset, predicates: &[Predicate]) -> Vec<&'a Record> {
        dataset
            .records()
            .iter()
            .filter(|record| Self::matches(record, predicates))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::{CriteriaNormalizer, PredicateBuilder, RawCriteria};

    fn dataset() -> Dataset {
        Dataset::new(["MOF", "N2", "CO2"])
            .unwrap()
            .with_row(vec!["A".into(), 0.5.into(), 0.5.into()])
            .unwrap()
            .with_row(vec!["B".into(), 0.5.into(), 0.9.into()])
            .unwrap()
            .with_row(vec!["C".into(), 0.505.into(), 0.5.into()])
            .unwrap()
    }

    fn predicates(raw: RawCriteria, ds: &Dataset) -> Vec<Predicate> {
        let norm = CriteriaNormalizer::normalize(&raw).unwrap();
        PredicateBuilder::build(&norm, ds).unwrap()
    }

    #[test]
    fn test_and_semantics() {
        let ds = dataset();
        let preds = predicates(
            RawCriteria::new().with_number("N2", 0.5).with_number("CO2", 0.5),
            &ds,
        );
        let names: Vec<String> = RecordFilter::apply(&ds, &preds)
            .iter()
            .map(|r| r.get(0).to_string())
            .collect();
        assert_eq!(names, vec!["A", "C"]);
    }

    #[test]
    fn test_preserves_dataset_order() {
        let ds = dataset();
        let preds = predicates(RawCriteria::new().with_number("N2", 0.5), &ds);
        let matched = RecordFilter::apply(&ds, &preds);
        assert_eq!(matched.len(), 3);
        assert!(std::ptr::eq(matched[0], &ds.records()[0]));
        assert!(std::ptr::eq(matched[2], &ds.records()[2]));
    }

    #[test]
    fn test_no_matches_is_empty() {
        let ds = dataset();
        let preds = predicates(RawCriteria::new().with_text("MOF", "Z"), &ds);
        assert!(RecordFilter::apply(&ds, &preds).is_empty());
    }
}
