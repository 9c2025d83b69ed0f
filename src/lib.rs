//! mofmatch - tolerance matching over MOF adsorption records
//!
//! Matches partial, mixed-type criteria against a table of material records
//! and returns one aggregated row per matching framework.

pub mod cli;
pub mod dataset;
pub mod export;
pub mod matcher;
pub mod observability;
