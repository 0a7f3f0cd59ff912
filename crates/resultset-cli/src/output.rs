//! Report and code output

use anyhow::{Context, Result};
use clap::ValueEnum;
use resultset::{ComparisonResponse, CsvWriteOptions, CsvWriter, LineTerminator};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// How a comparison report is written
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// One line per finding plus a summary
    Text,
    /// The whole response, diagnostics included
    Json,
    /// One record per finding with a header record
    Csv,
}

/// Open the output file, or stdout when no path is given
fn open_output(output: Option<&Path>) -> Result<Box<dyn Write>> {
    Ok(match output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path)
                .with_context(|| format!("Failed to create '{}'", path.display()))?,
        )),
        None => Box::new(io::stdout().lock()),
    })
}

/// Write a comparison response in the chosen format
///
/// Text and CSV reports are skipped for an invalid response; JSON always
/// carries the diagnostics.
pub fn write_report(
    response: &ComparisonResponse,
    format: ReportFormat,
    output: Option<&Path>,
) -> Result<()> {
    if format != ReportFormat::Json && !response.is_valid() {
        return Ok(());
    }

    let mut out = open_output(output)?;
    let report = response.payload();

    match format {
        ReportFormat::Text => {
            for finding in &report.findings {
                writeln!(out, "{}", finding)?;
            }
            let mut summary = format!(
                "{} difference(s) in {} sheet(s), {} cell(s) compared",
                report.findings.len(),
                report.sheets_compared,
                report.cells_compared
            );
            if report.truncated {
                summary.push_str(", stopped at the findings limit");
            }
            writeln!(out, "{}", summary)?;
        }
        ReportFormat::Json => {
            serde_json::to_writer_pretty(&mut out, response)
                .context("Failed to serialize report")?;
            writeln!(out)?;
        }
        ReportFormat::Csv => {
            let options = CsvWriteOptions {
                line_terminator: LineTerminator::LF,
                ..CsvWriteOptions::default()
            };
            CsvWriter::write(&report.to_sheet(), &mut out, &options)
                .context("Failed to write CSV report")?;
        }
    }

    out.flush().context("Failed to flush output")?;
    Ok(())
}

/// Write generated code
pub fn write_code(code: &str, output: Option<&Path>) -> Result<()> {
    let mut out = open_output(output)?;
    out.write_all(code.as_bytes())
        .context("Failed to write code")?;
    out.flush().context("Failed to flush output")?;
    if let Some(path) = output {
        eprintln!("Wrote code to '{}'", path.display());
    }
    Ok(())
}
