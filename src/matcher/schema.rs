//! Fixed column configuration for matching
//!
//! The default is the MOF adsorption sheet: records keyed by framework name,
//! gas mixture and operating conditions, with working-capacity and pore
//! descriptors. Configuration may replace the lists, but the output schema is
//! never inferred from data.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::errors::{MatchError, MatchResult};

/// Entity identity column of the default schema
pub const ENTITY_COLUMN: &str = "MOF";

/// Primary numeric column of the default schema
pub const PRIMARY_COLUMN: &str = "Gas uptake (mmol/g)";

/// Columns a user may search on
pub const INPUT_COLUMNS: &[&str] = &[
    "MOF",
    "N2",
    "CO2",
    "CH4",
    "Gas Temperature (°C)",
    "Gas Pressure (bar)",
    "Gas uptake (mmol/g)",
    "Void Fraction",
    "MSA (m²/g)",
    "VSA (m²/cm³)",
    "PLD (Å)",
    "LCD (Å)",
];

/// Columns of every output row, in order
pub const OUTPUT_COLUMNS: &[&str] = &[
    "MOF",
    "KH (mmol/bar.g)",
    "W 0.1 (mmol/g)",
    "W 0.2 (mmol/g)",
    "W 0.3 (mmol/g)",
    "W 0.4 (mmol/g)",
    "W 0.5 (mmol/g)",
    "W 0.6 (mmol/g)",
    "W 0.7 (mmol/g)",
    "W 0.8 (mmol/g)",
    "W 0.9 (mmol/g)",
    "N2",
    "CO2",
    "CH4",
    "Gas Temperature (°C)",
    "Gas Pressure (bar)",
    "Gas uptake (mmol/g)",
    "Void Fraction",
    "MSA (m²/g)",
    "VSA (m²/cm³)",
    "PLD (Å)",
    "LCD (Å)",
];

/// Operating conditions carried over from the representative record
pub const OPERATING_COLUMNS: &[&str] = &[
    "N2",
    "CO2",
    "CH4",
    "Gas Temperature (°C)",
    "Gas Pressure (bar)",
    "Gas uptake (mmol/g)",
];

fn owned(columns: &[&str]) -> Vec<String> {
    columns.iter().map(|c| c.to_string()).collect()
}

/// Column roles used by the matcher
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchSchema {
    /// Column identifying the entity a record belongs to
    pub entity_column: String,
    /// Column whose maximum picks the representative record
    pub primary_column: String,
    /// Columns copied verbatim from the representative record
    pub operating_columns: Vec<String>,
    /// Columns offered for searching
    pub input_columns: Vec<String>,
    /// Output row layout
    pub output_columns: Vec<String>,
}

impl Default for MatchSchema {
    fn default() -> Self {
        Self::mof()
    }
}

impl MatchSchema {
    /// The MOF adsorption schema
    pub fn mof() -> Self {
        Self {
            entity_column: ENTITY_COLUMN.to_string(),
            primary_column: PRIMARY_COLUMN.to_string(),
            operating_columns: owned(OPERATING_COLUMNS),
            input_columns: owned(INPUT_COLUMNS),
            output_columns: owned(OUTPUT_COLUMNS),
        }
    }

    /// Returns true if the column is carried over from the representative
    pub fn is_operating(&self, column: &str) -> bool {
        self.operating_columns.iter().any(|c| c == column)
    }

    /// Checks that the column roles are consistent
    pub fn validate(&self) -> MatchResult<()> {
        if self.output_columns.is_empty() {
            return Err(MatchError::schema_mismatch("output schema is empty"));
        }

        let mut seen = HashSet::with_capacity(self.output_columns.len());
        for column in &self.output_columns {
            if !seen.insert(column.as_str()) {
                return Err(MatchError::schema_mismatch(format!(
                    "duplicate output column: '{}'",
                    column
                )));
            }
        }

        if !seen.contains(self.entity_column.as_str()) {
            return Err(MatchError::schema_mismatch(format!(
                "entity column '{}' is not an output column",
                self.entity_column
            )));
        }

        if let Some(stray) = self
            .operating_columns
            .iter()
            .find(|c| !seen.contains(c.as_str()))
        {
            return Err(MatchError::schema_mismatch(format!(
                "operating column '{}' is not an output column",
                stray
            )));
        }

        if !self.is_operating(&self.primary_column) {
            return Err(MatchError::schema_mismatch(format!(
                "primary column '{}' must be an operating column",
                self.primary_column
            )));
        }

        Ok(())
    }
}
