//! Cell values
//!
//! A dataset cell is text, a number, or missing. Nothing else survives
//! loading: spreadsheet booleans, dates and formulas arrive here as text.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A single cell of a record or output row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    /// Numeric cell
    Number(f64),
    /// Text cell, stored as written
    Text(String),
    /// Empty or absent cell
    Missing,
}

impl CellValue {
    /// Classifies a raw cell as read from a delimited file.
    ///
    /// Blank cells are missing, cells that parse as a finite-or-infinite
    /// number are numeric, everything else is kept verbatim as text.
    pub fn from_raw(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return CellValue::Missing;
        }
        match trimmed.parse::<f64>() {
            Ok(n) if n.is_nan() => CellValue::Missing,
            Ok(n) => CellValue::Number(n),
            Err(_) => CellValue::Text(raw.to_string()),
        }
    }

    /// Creates a text cell
    pub fn text(s: impl Into<String>) -> Self {
        CellValue::Text(s.into())
    }

    /// Returns true if the cell is missing
    pub fn is_missing(&self) -> bool {
        matches!(self, CellValue::Missing)
    }

    /// Coerces the cell to a number.
    ///
    /// Text is trimmed and parsed. Missing cells, unparsable text and NaN
    /// are coercion misses and yield `None`.
    pub fn as_number(&self) -> Option<f64> {
        let n = match self {
            CellValue::Number(n) => *n,
            CellValue::Text(s) => s.trim().parse::<f64>().ok()?,
            CellValue::Missing => return None,
        };
        if n.is_nan() {
            None
        } else {
            Some(n)
        }
    }

    /// Renders the cell as text, or `None` for a missing cell.
    pub fn render_text(&self) -> Option<Cow<'_, str>> {
        match self {
            CellValue::Number(n) => Some(Cow::Owned(n.to_string())),
            CellValue::Text(s) => Some(Cow::Borrowed(s.as_str())),
            CellValue::Missing => None,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Number(n) => write!(f, "{}", n),
            CellValue::Text(s) => write!(f, "{}", s),
            CellValue::Missing => Ok(()),
        }
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(CellValue::Missing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw_classification() {
        assert_eq!(CellValue::from_raw(""), CellValue::Missing);
        assert_eq!(CellValue::from_raw("   "), CellValue::Missing);
        assert_eq!(CellValue::from_raw(" 0.25 "), CellValue::Number(0.25));
        assert_eq!(CellValue::from_raw("1e3"), CellValue::Number(1000.0));
        assert_eq!(CellValue::from_raw(" ZIF-8 "), CellValue::text(" ZIF-8 "));
    }

    #[test]
    fn test_from_raw_nan_is_missing() {
        assert_eq!(CellValue::from_raw("NaN"), CellValue::Missing);
    }

    #[test]
    fn test_numeric_coercion() {
        assert_eq!(CellValue::Number(2.5).as_number(), Some(2.5));
        assert_eq!(CellValue::text(" 12 ").as_number(), Some(12.0));
        assert_eq!(CellValue::text("n/a").as_number(), None);
        assert_eq!(CellValue::Missing.as_number(), None);
        assert_eq!(CellValue::Number(f64::NAN).as_number(), None);
    }

    #[test]
    fn test_render_text() {
        assert_eq!(CellValue::Number(10.0).render_text().as_deref(), Some("10"));
        assert_eq!(CellValue::Number(0.5).render_text().as_deref(), Some("0.5"));
        assert_eq!(CellValue::text("UiO-66").render_text().as_deref(), Some("UiO-66"));
        assert!(CellValue::Missing.render_text().is_none());
    }

    #[test]
    fn test_json_shape() {
        let cells = vec![CellValue::Number(1.5), CellValue::text("a"), CellValue::Missing];
        let json = serde_json::to_string(&cells).unwrap();
        assert_eq!(json, r#"[1.5,"a",null]"#);

        let back: Vec<CellValue> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cells);
    }
}
