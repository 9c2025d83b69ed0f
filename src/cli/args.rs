//! CLI argument definitions using clap
//!
//! Commands:
//! - mofmatch search --dataset <path> [--criterion NAME=VALUE]... [--format json|csv]
//! - mofmatch columns
//! - mofmatch preview --dataset <path> [--rows N]

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// mofmatch - tolerance matching over MOF adsorption records
#[derive(Parser, Debug)]
#[command(name = "mofmatch")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, global = true, default_value = "./mofmatch.json")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

/// Output encoding for search results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `{"status":"ok","data":{"columns":[..],"rows":[[..]]}}`
    Json,
    /// Header row plus one line per entity
    Csv,
}

impl OutputFormat {
    /// Returns the flag spelling
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Match criteria against the dataset and print one row per entity
    Search {
        /// Dataset file (.csv or .json); overrides `dataset_path` in the config
        #[arg(long)]
        dataset: Option<PathBuf>,

        /// Criterion as NAME=VALUE; repeatable. Without any, a JSON object
        /// of criteria is read from stdin.
        #[arg(long = "criterion", short = 'c', value_name = "NAME=VALUE")]
        criteria: Vec<String>,

        /// Result encoding
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,

        /// Write results to this file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// List the searchable input columns and the output schema
    Columns,

    /// Print the first records of the dataset
    Preview {
        /// Dataset file (.csv or .json); overrides `dataset_path` in the config
        #[arg(long)]
        dataset: Option<PathBuf>,

        /// Number of records; defaults to `preview_rows` from the config
        #[arg(long)]
        rows: Option<usize>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
