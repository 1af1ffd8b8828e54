use anyhow::Result;
use clap::ValueEnum;
use colored::*;
use events_core::{LineKind, Report};
use std::path::Path;

/// Console rendering of the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

pub fn print_validation_report(report: &Report, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => print_json_report(report),
        OutputFormat::Text => {
            print_text_report(report);
            Ok(())
        }
    }
}

fn print_text_report(report: &Report) {
    println!("\n{}", render_text_report(report));
}

fn render_text_report(report: &Report) -> String {
    report
        .console_lines()
        .into_iter()
        .map(|line| match line.kind {
            LineKind::Title => line.text.bold().to_string(),
            LineKind::Passed => line.text.green().bold().to_string(),
            LineKind::Failed => line.text.red().bold().to_string(),
            LineKind::Detail => line.text.red().to_string(),
            LineKind::Plain => line.text,
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn print_json_report(report: &Report) -> Result<()> {
    println!("{}", report.to_json()?);
    Ok(())
}

pub fn print_report_location(path: &Path) {
    println!(
        "\n{} Validation report also written to {}",
        "ℹ".blue().bold(),
        path.display()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use events_core::{Column, FailureRecord, RowOutcome, RunState};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_text_report_matches_display() {
        colored::control::set_override(false);

        let clean = Report::from_state(&RunState::schema_accepted().record(RowOutcome {
            row: 1,
            failures: vec![],
        }));
        assert_eq!(render_text_report(&clean), clean.to_string());

        let failing = Report::from_state(&RunState::schema_accepted().record(RowOutcome {
            row: 1,
            failures: vec![
                FailureRecord::invalid(1, Column::Country, "USA"),
                FailureRecord::null(1, Column::Amount),
            ],
        }));
        assert_eq!(render_text_report(&failing), failing.to_string());
    }
}
