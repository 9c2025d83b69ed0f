//! Search criteria and their normalization
//!
//! Raw criteria come from free-form user input. Normalization trims column
//! names, drops blank values and classifies each remaining value as numeric
//! or text.

use super::errors::{MatchError, MatchResult};

/// A caller-supplied criterion value before classification
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    /// Free-form text, possibly numeric or blank
    Text(String),
    /// Pre-classified number
    Number(f64),
    /// Absent value
    Empty,
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        RawValue::Text(s.to_string())
    }
}

impl From<String> for RawValue {
    fn from(s: String) -> Self {
        RawValue::Text(s)
    }
}

impl From<f64> for RawValue {
    fn from(n: f64) -> Self {
        RawValue::Number(n)
    }
}

/// Raw criteria in insertion order, keyed by column name
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawCriteria {
    entries: Vec<(String, RawValue)>,
}

impl RawCriteria {
    /// Creates empty criteria
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a value, replacing an existing entry with the same key in place
    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<RawValue>) {
        let column = column.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(c, _)| *c == column) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((column, value)),
        }
    }

    /// Adds a text value
    pub fn with_text(mut self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(column, RawValue::Text(value.into()));
        self
    }

    /// Adds a numeric value
    pub fn with_number(mut self, column: impl Into<String>, value: f64) -> Self {
        self.insert(column, RawValue::Number(value));
        self
    }

    /// Adds an absent value
    pub fn with_empty(mut self, column: impl Into<String>) -> Self {
        self.insert(column, RawValue::Empty);
        self
    }

    /// Returns the entries in insertion order
    pub fn entries(&self) -> &[(String, RawValue)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for RawCriteria
where
    K: Into<String>,
    V: Into<RawValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut criteria = RawCriteria::new();
        for (k, v) in iter {
            criteria.insert(k, v);
        }
        criteria
    }
}

/// A classified criterion value
#[derive(Debug, Clone, PartialEq)]
pub enum CriterionValue {
    /// Matched within the tolerance band
    Numeric(f64),
    /// Matched case-insensitively after trimming
    Text(String),
}

/// One normalized criterion
#[derive(Debug, Clone, PartialEq)]
pub struct Criterion {
    /// Trimmed column name
    pub column: String,
    /// Classified value
    pub value: CriterionValue,
}

/// Non-empty normalized criteria, in insertion order
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedCriteria {
    criteria: Vec<Criterion>,
}

impl NormalizedCriteria {
    pub fn iter(&self) -> impl Iterator<Item = &Criterion> {
        self.criteria.iter()
    }

    pub fn len(&self) -> usize {
        self.criteria.len()
    }

    /// Always false; normalization rejects empty criteria
    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }

    /// Returns the criterion for a column, if any
    pub fn get(&self, column: &str) -> Option<&CriterionValue> {
        self.criteria
            .iter()
            .find(|c| c.column == column)
            .map(|c| &c.value)
    }
}

/// Sanitizes and classifies raw criteria
pub struct CriteriaNormalizer;

impl CriteriaNormalizer {
    /// Normalizes raw criteria.
    ///
    /// Fails with `MOF_INVALID_CRITERIA` if nothing remains.
    pub fn normalize(raw: &RawCriteria) -> MatchResult<NormalizedCriteria> {
        let mut criteria: Vec<Criterion> = Vec::with_capacity(raw.len());

        for (column, value) in raw.entries() {
            let value = match Self::classify(value) {
                Some(v) => v,
                None => continue,
            };
            let column = column.trim();

            // Keys equal after trimming collapse onto the first position
            match criteria.iter_mut().find(|c| c.column == column) {
                Some(existing) => existing.value = value,
                None => criteria.push(Criterion {
                    column: column.to_string(),
                    value,
                }),
            }
        }

        if criteria.is_empty() {
            return Err(MatchError::no_criteria());
        }

        Ok(NormalizedCriteria { criteria })
    }

    /// Classifies a single value, `None` for blank or absent
    fn classify(value: &RawValue) -> Option<CriterionValue> {
        match value {
            RawValue::Empty => None,
            RawValue::Number(n) => Some(CriterionValue::Numeric(*n)),
            RawValue::Text(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return None;
                }
                match trimmed.parse::<f64>() {
                    Ok(n) => Some(CriterionValue::Numeric(n)),
                    Err(_) => Some(CriterionValue::Text(trimmed.to_string())),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::MatchErrorCode;

    #[test]
    fn test_classification() {
        let raw = RawCriteria::new()
            .with_text("MOF", "  ZIF-8 ")
            .with_text("N2", " 0.5 ")
            .with_number("CO2", 0.25);

        let norm = CriteriaNormalizer::normalize(&raw).unwrap();
        assert_eq!(norm.len(), 3);
        assert_eq!(norm.get("MOF"), Some(&CriterionValue::Text("ZIF-8".into())));
        assert_eq!(norm.get("N2"), Some(&CriterionValue::Numeric(0.5)));
        assert_eq!(norm.get("CO2"), Some(&CriterionValue::Numeric(0.25)));
    }

    #[test]
    fn test_blank_entries_dropped() {
        let raw = RawCriteria::new()
            .with_text("MOF", "   ")
            .with_empty("N2")
            .with_text("CO2", "1");

        let norm = CriteriaNormalizer::normalize(&raw).unwrap();
        assert_eq!(norm.len(), 1);
        assert!(norm.get("MOF").is_none());
    }

    #[test]
    fn test_column_names_trimmed() {
        let raw = RawCriteria::new().with_text("  N2 ", "0.5");
        let norm = CriteriaNormalizer::normalize(&raw).unwrap();
        assert_eq!(norm.iter().next().unwrap().column, "N2");
    }

    #[test]
    fn test_trimmed_duplicates_collapse_in_place() {
        let raw = RawCriteria::new()
            .with_text("N2", "0.5")
            .with_text("CO2", "x")
            .with_text(" N2", "0.7");

        let norm = CriteriaNormalizer::normalize(&raw).unwrap();
        let columns: Vec<&str> = norm.iter().map(|c| c.column.as_str()).collect();
        assert_eq!(columns, vec!["N2", "CO2"]);
        assert_eq!(norm.get("N2"), Some(&CriterionValue::Numeric(0.7)));
    }

    #[test]
    fn test_blank_duplicate_does_not_erase() {
        let raw = RawCriteria::new().with_text("N2", "0.5").with_text(" N2 ", "");
        let norm = CriteriaNormalizer::normalize(&raw).unwrap();
        assert_eq!(norm.get("N2"), Some(&CriterionValue::Numeric(0.5)));
    }

    #[test]
    fn test_all_blank_rejected() {
        let raw = RawCriteria::new().with_text("MOF", "").with_empty("N2");
        let err = CriteriaNormalizer::normalize(&raw).unwrap_err();
        assert_eq!(err.code(), MatchErrorCode::InvalidCriteria);

        let err = CriteriaNormalizer::normalize(&RawCriteria::new()).unwrap_err();
        assert_eq!(err.code(), MatchErrorCode::InvalidCriteria);
    }

    #[test]
    fn test_insert_replaces_same_key() {
        let mut raw = RawCriteria::new();
        raw.insert("N2", "0.1");
        raw.insert("N2", 0.2);
        assert_eq!(raw.len(), 1);
        assert_eq!(raw.entries()[0].1, RawValue::Number(0.2));
    }

    #[test]
    fn test_from_iterator() {
        let raw: RawCriteria = vec![("MOF", "ZIF-8"), ("N2", "")].into_iter().collect();
        assert_eq!(raw.len(), 2);
    }
}
