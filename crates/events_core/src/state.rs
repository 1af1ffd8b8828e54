//! Per-row outcomes and the accumulated state of a validation run.

use crate::Column;
use serde::Serialize;
use std::fmt;

/// Value recorded in place of a field that was empty after trimming.
pub const NULL_SENTINEL: &str = "<NULL>";

/// One invalid field of one row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailureRecord {
    /// 1-based data row number (header excluded)
    pub row: usize,

    /// Column the invalid value belongs to
    pub column: Column,

    /// The trimmed value, or [`NULL_SENTINEL`] for a missing value
    pub invalid_value: String,
}

impl FailureRecord {
    /// Records a missing (empty or whitespace-only) value.
    pub fn null(row: usize, column: Column) -> Self {
        Self {
            row,
            column,
            invalid_value: NULL_SENTINEL.to_string(),
        }
    }

    /// Records a value that failed its column's format check.
    pub fn invalid(row: usize, column: Column, value: impl Into<String>) -> Self {
        Self {
            row,
            column,
            invalid_value: value.into(),
        }
    }
}

impl fmt::Display for FailureRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Row {}: Column '{}' invalid value '{}'",
            self.row, self.column, self.invalid_value
        )
    }
}

/// Result of evaluating a single row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowOutcome {
    /// 1-based data row number
    pub row: usize,

    /// Failures found in this row, in column order
    pub failures: Vec<FailureRecord>,
}

impl RowOutcome {
    /// Returns true if every field of the row passed.
    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Counters and failures accumulated over one validation pass.
///
/// Built by folding [`RowOutcome`]s with [`RunState::record`]. Every
/// recorded row lands in exactly one of the passed/failed counters, so
/// `total_rows == passed_rows + failed_rows` holds after each step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunState {
    schema_ok: bool,
    total_rows: usize,
    passed_rows: usize,
    failed_rows: usize,
    failed_details: Vec<FailureRecord>,
}

impl RunState {
    /// State right after the header matched the expected schema.
    pub fn schema_accepted() -> Self {
        Self {
            schema_ok: true,
            ..Self::default()
        }
    }

    /// Folds one row outcome into the state.
    pub fn record(mut self, outcome: RowOutcome) -> Self {
        self.total_rows += 1;
        if outcome.passed() {
            self.passed_rows += 1;
        } else {
            self.failed_rows += 1;
            self.failed_details.extend(outcome.failures);
        }
        self
    }

    pub fn schema_ok(&self) -> bool {
        self.schema_ok
    }

    pub fn total_rows(&self) -> usize {
        self.total_rows
    }

    pub fn passed_rows(&self) -> usize {
        self.passed_rows
    }

    pub fn failed_rows(&self) -> usize {
        self.failed_rows
    }

    /// Failures in the order they were discovered.
    pub fn failed_details(&self) -> &[FailureRecord] {
        &self.failed_details
    }
}
