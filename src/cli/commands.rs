//! CLI command implementations
//!
//! Each command loads configuration, then the dataset if it needs one, then
//! calls into the matching engine. Only this layer logs.

use std::path::Path;

use serde_json::json;
use uuid::Uuid;

use crate::dataset::{Dataset, DatasetLoader};
use crate::export::CsvExporter;
use crate::matcher::{Matcher, OutputTable, RawCriteria};
use crate::observability::{log_event_with_fields, Event};

use super::args::{Cli, Command, OutputFormat};
use super::config::Config;
use super::errors::{CliError, CliResult};
use super::io::{criteria_from_pairs, read_criteria, write_error, write_response, write_text};

/// Main CLI entry point
///
/// Parses arguments, dispatches, and reports failures as a JSON error
/// response on stdout before returning them.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    let result = run_command(&cli.config, cli.command);
    if let Err(ref e) = result {
        log_event_with_fields(
            Event::CommandFailed,
            &[("code", e.code_str()), ("message", e.message())],
        );
        // Best effort; the error is still returned for the exit code
        let _ = write_error(e.code_str(), e.message());
    }
    result
}

/// Run the appropriate command based on CLI args
pub fn run_command(config_path: &Path, cmd: Command) -> CliResult<()> {
    let config = load_config(config_path)?;
    match cmd {
        Command::Search {
            dataset,
            criteria,
            format,
            output,
        } => {
            let raw = if criteria.is_empty() {
                read_criteria()?
            } else {
                criteria_from_pairs(&criteria)?
            };
            let dataset = load_dataset(&config, dataset.as_deref())?;
            let table = search(&config, &dataset, &raw)?;
            emit(&config, &table, format, output.as_deref())
        }
        Command::Columns => columns(&config),
        Command::Preview { dataset, rows } => {
            let dataset = load_dataset(&config, dataset.as_deref())?;
            preview(&dataset, rows.unwrap_or(config.preview_rows))
        }
    }
}

fn load_config(path: &Path) -> CliResult<Config> {
    let config = Config::load(path)?;
    log_event_with_fields(
        Event::ConfigLoaded,
        &[("path", path.display().to_string().as_str())],
    );
    Ok(config)
}

/// Loads the dataset named on the command line or in the config
pub fn load_dataset(config: &Config, cli_path: Option<&Path>) -> CliResult<Dataset> {
    let path = config.dataset_path(cli_path)?;
    let dataset = DatasetLoader::new()
        .with_delimiter(config.delimiter()?)
        .load_path(&path)?;

    log_event_with_fields(
        Event::DatasetLoaded,
        &[
            ("columns", dataset.columns().len().to_string().as_str()),
            ("path", path.display().to_string().as_str()),
            ("records", dataset.len().to_string().as_str()),
        ],
    );

    Ok(dataset)
}

/// Runs one search and logs its outcome
pub fn search(config: &Config, dataset: &Dataset, raw: &RawCriteria) -> CliResult<OutputTable> {
    let search_id = Uuid::new_v4().to_string();
    log_event_with_fields(
        Event::SearchStart,
        &[
            ("criteria", raw.len().to_string().as_str()),
            ("search_id", search_id.as_str()),
        ],
    );

    let outcome = Matcher::new(config.schema.clone()).and_then(|m| m.find_matches(dataset, raw));
    let table = match outcome {
        Ok(table) => table,
        Err(e) => {
            log_event_with_fields(
                Event::SearchRejected,
                &[
                    ("code", e.code().code()),
                    ("message", e.message()),
                    ("search_id", search_id.as_str()),
                ],
            );
            return Err(e.into());
        }
    };

    let event = if table.is_empty() {
        Event::SearchNoMatches
    } else {
        Event::SearchComplete
    };
    log_event_with_fields(
        event,
        &[("rows", table.len().to_string().as_str()), ("search_id", search_id.as_str())],
    );

    Ok(table)
}

fn emit(
    config: &Config,
    table: &OutputTable,
    format: OutputFormat,
    output: Option<&Path>,
) -> CliResult<()> {
    match (format, output) {
        (OutputFormat::Json, None) => write_response(serde_json::to_value(table)?),
        (OutputFormat::Csv, None) => {
            let exporter = CsvExporter::new().with_delimiter(config.delimiter()?);
            write_text(&exporter.render(table)?)
        }
        (format, Some(path)) => {
            write_export(config, table, format, path)?;
            log_event_with_fields(
                Event::ExportWritten,
                &[
                    ("format", format.as_str()),
                    ("path", path.display().to_string().as_str()),
                    ("rows", table.len().to_string().as_str()),
                ],
            );
            write_response(json!({ "rows": table.len(), "path": path.display().to_string() }))
        }
    }
}

/// Writes the table to a file in the requested format
pub fn write_export(
    config: &Config,
    table: &OutputTable,
    format: OutputFormat,
    path: &Path,
) -> CliResult<()> {
    match format {
        OutputFormat::Json => std::fs::write(path, serde_json::to_vec_pretty(table)?)?,
        OutputFormat::Csv => CsvExporter::new()
            .with_delimiter(config.delimiter()?)
            .write_path(table, path)?,
    }
    Ok(())
}

/// Lists the searchable input columns and the output schema
pub fn columns(config: &Config) -> CliResult<()> {
    let schema = &config.schema;
    write_response(json!({
        "entity_column": schema.entity_column,
        "primary_column": schema.primary_column,
        "input_columns": schema.input_columns,
        "operating_columns": schema.operating_columns,
        "output_columns": schema.output_columns,
    }))
}

/// Prints the first `rows` records
pub fn preview(dataset: &Dataset, rows: usize) -> CliResult<()> {
    if rows == 0 {
        return Err(CliError::usage_error("--rows must be > 0"));
    }

    let records: Vec<_> = dataset.head(rows).iter().map(|r| r.values()).collect();
    write_response(json!({
        "columns": dataset.columns(),
        "rows": records,
        "total_records": dataset.len(),
    }))
}
