use anyhow::{Context, Result};
use events_reader::read_file;
use events_validator::EventValidator;
use std::path::Path;
use std::process::ExitCode;
use tracing::info;

use crate::output::{self, OutputFormat};

pub fn execute(
    input: &Path,
    report_path: &Path,
    format: OutputFormat,
    strict: bool,
) -> Result<ExitCode> {
    info!("Validating events file: {}", input.display());
    info!("Strict mode: {}", strict);

    let dataset = read_file(input)
        .with_context(|| format!("Failed to read events file: {}", input.display()))?;
    info!("Loaded {} data rows", dataset.len());

    // Schema and shape errors end the run here, before any report is written
    let report = EventValidator::new().validate(&dataset)?;

    output::print_validation_report(&report, format)?;

    report
        .write_json(report_path)
        .with_context(|| format!("Failed to write report: {}", report_path.display()))?;

    let written = report_path
        .canonicalize()
        .unwrap_or_else(|_| report_path.to_path_buf());
    info!("Report written to {}", written.display());
    if format == OutputFormat::Text {
        output::print_report_location(&written);
    }

    if strict && !report.all_rows_passed() {
        return Ok(ExitCode::FAILURE);
    }

    Ok(ExitCode::SUCCESS)
}
