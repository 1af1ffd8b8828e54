//! The final validation report.
//!
//! A [`Report`] is a read-only view over a finished [`RunState`]. The same
//! value renders to the console and serializes to the persisted JSON
//! document, so both carry the full ordered failure list. Console text comes
//! from [`Report::console_lines`], which both `Display` and styled printers
//! consume.

use crate::{FailureRecord, ReportError, Result, RunState};
use serde::Serialize;
use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Default location of the persisted report, relative to the working directory.
pub const DEFAULT_REPORT_PATH: &str = "validation_report.json";

/// Checks applied to every run, in the order they are reported.
pub const CHECKS_PERFORMED: [&str; 4] = [
    "Schema check",
    "Null check",
    "Type/Format check",
    "Allowed values check",
];

/// Outcome of the header check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SchemaCheck {
    Passed,
    Failed,
}

impl SchemaCheck {
    fn as_str(self) -> &'static str {
        match self {
            SchemaCheck::Passed => "PASSED",
            SchemaCheck::Failed => "FAILED",
        }
    }
}

impl fmt::Display for SchemaCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Row counters of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total_rows: usize,
    pub passed_rows: usize,
    pub failed_rows: usize,
}

/// Summary of a completed validation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Whether the header matched the expected schema
    pub schema_check: SchemaCheck,

    /// Names of the checks that were applied
    pub checks_performed: Vec<String>,

    /// Row counters
    pub summary: Summary,

    /// Every failure, in discovery order
    pub failed_details: Vec<FailureRecord>,
}

impl Report {
    /// Builds the report from the final state of a run.
    pub fn from_state(state: &RunState) -> Self {
        Self {
            schema_check: if state.schema_ok() {
                SchemaCheck::Passed
            } else {
                SchemaCheck::Failed
            },
            checks_performed: CHECKS_PERFORMED.iter().map(|c| c.to_string()).collect(),
            summary: Summary {
                total_rows: state.total_rows(),
                passed_rows: state.passed_rows(),
                failed_rows: state.failed_rows(),
            },
            failed_details: state.failed_details().to_vec(),
        }
    }

    /// Returns true if every data row passed.
    pub fn all_rows_passed(&self) -> bool {
        self.summary.failed_rows == 0
    }

    /// Serializes the report as JSON indented with four spaces.
    pub fn to_json(&self) -> Result<String> {
        let mut buf = Vec::new();
        self.write_json_to(&mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// Writes the report as JSON to `path`, replacing any existing file.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| ReportError::io(path, e))?;
        let mut writer = BufWriter::new(file);
        self.write_json_to(&mut writer)?;
        writer
            .write_all(b"\n")
            .and_then(|_| writer.flush())
            .map_err(|e| ReportError::io(path, e))?;
        Ok(())
    }

    fn write_json_to<W: Write>(&self, writer: W) -> Result<()> {
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(writer, formatter);
        self.serialize(&mut serializer)?;
        Ok(())
    }
}

/// Role of a console line, used by styled printers to pick a colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Title,
    Plain,
    Passed,
    Failed,
    Detail,
}

/// One line of the console form of a [`Report`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLine {
    pub kind: LineKind,
    pub text: String,
}

impl ReportLine {
    fn new(kind: LineKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

impl Report {
    /// The console form, one entry per printed line.
    pub fn console_lines(&self) -> Vec<ReportLine> {
        let schema_kind = match self.schema_check {
            SchemaCheck::Passed => LineKind::Passed,
            SchemaCheck::Failed => LineKind::Failed,
        };

        let mut lines = vec![
            ReportLine::new(LineKind::Title, "--- Validation Report ---"),
            ReportLine::new(schema_kind, format!("Schema check: {}", self.schema_check)),
            ReportLine::new(
                LineKind::Plain,
                format!("Checks performed: [{}]", self.checks_performed.join(", ")),
            ),
        ];

        if self.all_rows_passed() {
            lines.push(ReportLine::new(
                LineKind::Passed,
                "All rows PASSED row-level validation",
            ));
        } else {
            lines.push(ReportLine::new(
                LineKind::Failed,
                format!(
                    "Row-level validation FAILED ({} issues found)",
                    self.summary.failed_rows
                ),
            ));
        }

        lines.push(ReportLine::new(
            LineKind::Plain,
            format!("Total rows   : {}", self.summary.total_rows),
        ));
        lines.push(ReportLine::new(
            LineKind::Plain,
            format!("Passed rows  : {}", self.summary.passed_rows),
        ));
        lines.push(ReportLine::new(
            LineKind::Plain,
            format!("Failed rows  : {}", self.summary.failed_rows),
        ));

        if !self.failed_details.is_empty() {
            lines.push(ReportLine::new(LineKind::Plain, ""));
            lines.push(ReportLine::new(LineKind::Failed, "Failed details:"));
            lines.extend(
                self.failed_details
                    .iter()
                    .map(|record| ReportLine::new(LineKind::Detail, format!("  {record}"))),
            );
        }

        lines
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.console_lines().iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            f.write_str(&line.text)?;
        }
        Ok(())
    }
}
