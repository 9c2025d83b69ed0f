//! JSON I/O handling for CLI
//!
//! - Criteria input: `NAME=VALUE` flags, or a single JSON object via stdin
//! - Output: single JSON object via stdout
//! - UTF-8 only

use std::io::{self, Read, Write};

use serde_json::Value;

use crate::matcher::{RawCriteria, RawValue};

use super::errors::{CliError, CliResult};

/// Read a JSON criteria object from stdin
pub fn read_criteria() -> CliResult<RawCriteria> {
    let mut input = String::new();
    io::stdin().lock().read_to_string(&mut input)?;

    if input.trim().is_empty() {
        return Err(CliError::io_error("Empty input"));
    }

    let value: Value = serde_json::from_str(&input)?;
    criteria_from_json(&value)
}

/// Converts a JSON object into raw criteria, in the object's key order.
///
/// Strings stay text (classified later), numbers are numeric, null is an
/// empty entry. Any other value is a usage error.
pub fn criteria_from_json(value: &Value) -> CliResult<RawCriteria> {
    let obj = value
        .as_object()
        .ok_or_else(|| CliError::usage_error("Criteria must be a JSON object"))?;

    let mut criteria = RawCriteria::new();
    for (column, v) in obj {
        let raw = match v {
            Value::String(s) => RawValue::Text(s.clone()),
            Value::Number(n) => match n.as_f64() {
                Some(f) => RawValue::Number(f),
                None => {
                    return Err(CliError::usage_error(format!(
                        "Criterion '{}' is not representable as a number",
                        column
                    )))
                }
            },
            Value::Null => RawValue::Empty,
            other => {
                return Err(CliError::usage_error(format!(
                    "Criterion '{}' must be a string, number or null, got {}",
                    column, other
                )))
            }
        };
        criteria.insert(column.clone(), raw);
    }

    Ok(criteria)
}

/// Parses `NAME=VALUE` pairs; the value may be empty, the name may not
pub fn criteria_from_pairs<S: AsRef<str>>(pairs: &[S]) -> CliResult<RawCriteria> {
    let mut criteria = RawCriteria::new();
    for pair in pairs {
        let pair = pair.as_ref();
        let (name, value) = pair.split_once('=').ok_or_else(|| {
            CliError::usage_error(format!("Criterion '{}' must be NAME=VALUE", pair))
        })?;
        if name.trim().is_empty() {
            return Err(CliError::usage_error(format!(
                "Criterion '{}' has an empty column name",
                pair
            )));
        }
        criteria.insert(name, RawValue::Text(value.to_string()));
    }
    Ok(criteria)
}

/// Write a success response to a writer
pub fn write_response_to<W: Write>(writer: &mut W, data: Value) -> CliResult<()> {
    let response = serde_json::json!({
        "status": "ok",
        "data": data
    });

    serde_json::to_writer(&mut *writer, &response)?;
    writeln!(writer)?;
    writer.flush()?;

    Ok(())
}

/// Write a success response to stdout
pub fn write_response(data: Value) -> CliResult<()> {
    write_response_to(&mut io::stdout(), data)
}

/// Write an error response to stdout
pub fn write_error(code: &str, message: &str) -> CliResult<()> {
    let response = serde_json::json!({
        "status": "error",
        "code": code,
        "message": message
    });

    let mut stdout = io::stdout();
    serde_json::to_writer(&mut stdout, &response)?;
    writeln!(stdout)?;
    stdout.flush()?;

    Ok(())
}

/// Write raw text to stdout
pub fn write_text(text: &str) -> CliResult<()> {
    let mut stdout = io::stdout();
    stdout.write_all(text.as_bytes())?;
    stdout.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_criteria_from_json() {
        let raw = criteria_from_json(&json!({"MOF": "ZIF-8", "N2": 0.5, "CO2": null})).unwrap();
        assert_eq!(raw.len(), 3);
        let n2 = raw.entries().iter().find(|(c, _)| c == "N2").unwrap();
        assert_eq!(n2.1, RawValue::Number(0.5));
        let co2 = raw.entries().iter().find(|(c, _)| c == "CO2").unwrap();
        assert_eq!(co2.1, RawValue::Empty);
    }

    #[test]
    fn test_criteria_from_json_keeps_caller_order() {
        let value: Value = serde_json::from_str(r#"{"Zeta": "1", "Alpha": "x"}"#).unwrap();
        let raw = criteria_from_json(&value).unwrap();
        let columns: Vec<&str> = raw.entries().iter().map(|(c, _)| c.as_str()).collect();
        assert_eq!(columns, vec!["Zeta", "Alpha"]);
    }

    #[test]
    fn test_criteria_from_json_rejects_non_object() {
        assert!(criteria_from_json(&json!(["MOF"])).is_err());
        assert!(criteria_from_json(&json!({"MOF": true})).is_err());
    }

    #[test]
    fn test_criteria_from_pairs() {
        let raw = criteria_from_pairs(&["MOF=ZIF-8", "N2 = 0.5", "CH4="]).unwrap();
        assert_eq!(raw.len(), 3);
        assert_eq!(raw.entries()[1], ("N2 ".to_string(), RawValue::Text(" 0.5".into())));
        assert_eq!(raw.entries()[2].1, RawValue::Text(String::new()));
    }

    #[test]
    fn test_pairs_value_may_contain_equals() {
        let raw = criteria_from_pairs(&["Note=a=b"]).unwrap();
        assert_eq!(raw.entries()[0].1, RawValue::Text("a=b".into()));
    }

    #[test]
    fn test_malformed_pairs_rejected() {
        assert!(criteria_from_pairs(&["MOF"]).is_err());
        assert!(criteria_from_pairs(&[" =1"]).is_err());
    }

    #[test]
    fn test_response_envelope() {
        let mut buf = Vec::new();
        write_response_to(&mut buf, json!({"rows": 1})).unwrap();
        let parsed: Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(parsed["status"], "ok");
        assert_eq!(parsed["data"]["rows"], 1);
    }
}
