//! Row evaluation.
//!
//! Every field of a row is checked, in schema order, even after an earlier
//! field failed. A null field is reported once as `<NULL>` and its format
//! rule is skipped.

use crate::{columns::validate_value, nulls::is_null};
use events_core::{COLUMN_COUNT, Column, FailureRecord, RowOutcome};
use tracing::debug;

/// Evaluates single rows against the column rules.
pub struct RowEvaluator;

impl RowEvaluator {
    /// Creates a new row evaluator.
    pub fn new() -> Self {
        Self
    }

    /// Evaluates one row of exactly [`COLUMN_COUNT`] fields.
    ///
    /// `row` is the 1-based data row number used in failure records.
    pub fn evaluate(&self, row: usize, fields: &[String; COLUMN_COUNT]) -> RowOutcome {
        let failures = Column::ALL
            .into_iter()
            .zip(fields)
            .filter_map(|(column, raw)| self.evaluate_field(row, column, raw))
            .collect();

        RowOutcome { row, failures }
    }

    /// Checks one field: null first, then the column rule.
    fn evaluate_field(&self, row: usize, column: Column, raw: &str) -> Option<FailureRecord> {
        if is_null(raw) {
            debug!(row, column = %column, "Null value");
            return Some(FailureRecord::null(row, column));
        }

        let value = raw.trim();
        if validate_value(column, value) {
            return None;
        }

        debug!(row, column = %column, value, "Invalid value");
        Some(FailureRecord::invalid(row, column, value))
    }
}

impl Default for RowEvaluator {
    fn default() -> Self {
        Self::new()
    }
}
