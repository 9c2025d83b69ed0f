//! CLI module for mofmatch
//!
//! Provides command-line interface for:
//! - search: match criteria against a dataset
//! - columns: list searchable and output columns
//! - preview: show the first records of a dataset

mod args;
mod commands;
mod config;
mod errors;
mod io;

pub use args::{Cli, Command, OutputFormat};
pub use commands::{columns, load_dataset, preview, run, run_command, search, write_export};
pub use config::{Config, DEFAULT_CONFIG_PATH};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{
    criteria_from_json, criteria_from_pairs, read_criteria, write_error, write_response,
    write_text,
};
