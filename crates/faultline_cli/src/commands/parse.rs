//! Parse command implementation.

use faultline_core::{Failure, PipelineConfig};
use faultline_tabular::{read_records, Record, Rows, Schema, TabularError};
use serde::Serialize;
use std::io;
use std::path::Path;
use thiserror::Error;
use tracing::info;

/// Errors that stop the parse command before any row is decoded.
#[derive(Debug, Error)]
pub enum ParseCommandError {
    /// The input file could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        /// Input path.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The schema or header is invalid.
    #[error(transparent)]
    Tabular(#[from] TabularError),

    /// The delimiter argument is not a single character.
    #[error("invalid delimiter {0:?}: expected one character or \\t")]
    InvalidDelimiter(String),
}

/// Options for the parse command.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Column description.
    pub schema: String,
    /// Field delimiter.
    pub delimiter: char,
    /// Whether the first line is a header.
    pub has_header: bool,
    /// Leave decoded records out of the report.
    pub failures_only: bool,
}

/// Parse result.
#[derive(Debug, Serialize)]
pub struct ParseReport {
    /// Input path.
    pub path: String,
    /// Number of rows that decoded.
    pub records_read: usize,
    /// Number of rows that failed.
    pub failure_count: usize,
    /// Decoded records (unless only failures were requested).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub records: Option<Vec<Record>>,
    /// Failure log in input order.
    pub failures: Vec<FailureEntry>,
}

/// One failure log entry.
#[derive(Debug, Serialize)]
pub struct FailureEntry {
    /// Input line, when the failure came from a row.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    /// Pipeline stage that captured the failure.
    pub stage: usize,
    /// Failure message.
    pub message: String,
}

impl From<&Failure> for FailureEntry {
    fn from(failure: &Failure) -> Self {
        Self {
            line: failure
                .downcast_cause::<TabularError>()
                .and_then(TabularError::line),
            stage: failure.stage(),
            message: failure.message().to_string(),
        }
    }
}

/// Parses the `--delimiter` argument.
pub fn parse_delimiter(raw: &str) -> Result<char, ParseCommandError> {
    match raw {
        "\\t" | "tab" => Ok('\t'),
        _ => {
            let mut chars = raw.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Ok(c),
                _ => Err(ParseCommandError::InvalidDelimiter(raw.to_string())),
            }
        }
    }
}

/// Decodes `text` and builds the report.
pub fn build_report(
    path: &str,
    text: &str,
    options: &ParseOptions,
) -> Result<ParseReport, ParseCommandError> {
    let schema = Schema::parse(&options.schema)?;
    let rows = Rows::new(text)
        .with_delimiter(options.delimiter)
        .with_header(options.has_header);

    let (records, failures) =
        read_records(rows, schema, PipelineConfig::default())?.collect_with_failures();

    Ok(ParseReport {
        path: path.to_string(),
        records_read: records.len(),
        failure_count: failures.len(),
        records: (!options.failures_only).then_some(records),
        failures: failures.iter().map(FailureEntry::from).collect(),
    })
}

/// Runs the parse command.
pub fn run(
    path: &Path,
    options: &ParseOptions,
    format: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = std::fs::read_to_string(path).map_err(|source| ParseCommandError::Read {
        path: path.display().to_string(),
        source,
    })?;
    let report = build_report(&path.display().to_string(), &text, options)?;
    info!(
        "Parsed {:?}: {} records, {} failures",
        path, report.records_read, report.failure_count
    );

    // Output
    match format {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        _ => {
            print_text_output(&report);
        }
    }

    Ok(())
}

fn print_text_output(report: &ParseReport) {
    println!("File: {}", report.path);
    println!("Records: {}", report.records_read);
    println!("Failures: {}", report.failure_count);

    if let Some(records) = &report.records {
        println!();
        for record in records {
            let fields: Vec<String> = record
                .iter()
                .map(|(name, cell)| format!("{name}={cell}"))
                .collect();
            println!("  {:>5}  {}", record.line(), fields.join(" "));
        }
    }

    if !report.failures.is_empty() {
        println!();
        println!("Failure log:");
        for failure in &report.failures {
            match failure.line {
                Some(line) => println!("  {line:>5}  {}", failure.message),
                None => println!("      -  {}", failure.message),
            }
        }
    }
}
