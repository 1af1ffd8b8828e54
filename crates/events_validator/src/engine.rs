//! Main validation engine.
//!
//! This module provides the `EventValidator` that checks the header and then
//! folds every data row into a [`RunState`], producing a [`Report`].

use crate::{Result, RowEvaluator, SchemaChecker, ValidationError};
use events_core::{COLUMN_COUNT, EventDataset, RawRow, Report, RunState};
use tracing::{info, warn};

/// Validation engine for event datasets.
///
/// # Example
///
/// ```rust
/// use events_core::{EventDataset, expected_header};
/// use events_validator::EventValidator;
///
/// let mut dataset = EventDataset::with_header(expected_header());
/// dataset.add_row(
///     ["e1", "2024-01-01T00:00:00Z", "u_42", "127.0.0.1", "US", "login", "9.99"]
///         .map(String::from)
///         .to_vec(),
/// );
///
/// let report = EventValidator::new().validate(&dataset).expect("header matches");
/// assert_eq!(report.summary.passed_rows, 1);
/// ```
pub struct EventValidator {
    schema_checker: SchemaChecker,
    row_evaluator: RowEvaluator,
}

impl EventValidator {
    /// Creates a new event validator.
    pub fn new() -> Self {
        Self {
            schema_checker: SchemaChecker::new(),
            row_evaluator: RowEvaluator::new(),
        }
    }

    /// Validates a dataset and builds the report.
    ///
    /// Fails with [`ValidationError::SchemaMismatch`] before any row is read
    /// if the header is wrong, and with [`ValidationError::MalformedRow`] if a
    /// row does not have one field per column. Invalid field values never
    /// fail the call; they are listed in the report.
    pub fn validate(&self, dataset: &EventDataset) -> Result<Report> {
        let state = self.run(dataset.header(), dataset.rows())?;
        Ok(Report::from_state(&state))
    }

    /// Runs the header check and the row pass, returning the final state.
    pub fn run<'a, I>(&self, header: &[String], rows: I) -> Result<RunState>
    where
        I: IntoIterator<Item = &'a RawRow>,
    {
        self.schema_checker.check(header)?;
        info!("Schema check PASSED (expected columns match)");

        let state = rows
            .into_iter()
            .enumerate()
            .try_fold(RunState::schema_accepted(), |state, (idx, row)| {
                self.step(state, idx + 1, row)
            })?;

        info!(
            total = state.total_rows(),
            passed = state.passed_rows(),
            failed = state.failed_rows(),
            "Row-level validation finished"
        );

        Ok(state)
    }

    /// Evaluates one row and folds its outcome into `state`.
    fn step(&self, state: RunState, row: usize, fields: &RawRow) -> Result<RunState> {
        let fields: &[String; COLUMN_COUNT] = fields.as_slice().try_into().map_err(|_| {
            warn!(row, found = fields.len(), "Row has wrong number of fields");
            ValidationError::malformed_row(row, COLUMN_COUNT, fields.len())
        })?;

        Ok(state.record(self.row_evaluator.evaluate(row, fields)))
    }
}

impl Default for EventValidator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use events_core::{Column, FailureRecord, SchemaCheck, expected_header};
    use pretty_assertions::assert_eq;

    fn row(values: [&str; COLUMN_COUNT]) -> RawRow {
        values.map(String::from).to_vec()
    }

    fn valid_row() -> RawRow {
        row([
            "e1",
            "2024-01-01T00:00:00Z",
            "u_42",
            "127.0.0.1",
            "US",
            "login",
            "9.99",
        ])
    }

    #[test]
    fn test_header_only() {
        let dataset = EventDataset::with_header(expected_header());
        let report = EventValidator::new().validate(&dataset).unwrap();

        assert_eq!(report.schema_check, SchemaCheck::Passed);
        assert_eq!(report.summary.total_rows, 0);
        assert!(report.failed_details.is_empty());
    }

    #[test]
    fn test_mixed_rows() {
        let mut bad = valid_row();
        bad[4] = "USA".to_string();

        let dataset = EventDataset::new(expected_header(), vec![valid_row(), bad, valid_row()]);
        let state = EventValidator::new()
            .run(dataset.header(), dataset.rows())
            .unwrap();

        assert!(state.schema_ok());
        assert_eq!(state.total_rows(), 3);
        assert_eq!(state.passed_rows(), 2);
        assert_eq!(state.failed_rows(), 1);
        assert_eq!(
            state.failed_details(),
            [FailureRecord::invalid(2, Column::Country, "USA")]
        );
    }

    #[test]
    fn test_schema_mismatch_stops_before_rows() {
        let mut header = expected_header();
        header.swap(0, 1);

        // a malformed row would fail too; the header error must win
        let dataset = EventDataset::new(header, vec![vec!["only".to_string()]]);
        let err = EventValidator::new().validate(&dataset).unwrap_err();

        assert!(matches!(err, ValidationError::SchemaMismatch { .. }));
    }

    #[test]
    fn test_short_row_is_malformed() {
        let mut short = valid_row();
        short.pop();

        let dataset = EventDataset::new(expected_header(), vec![valid_row(), short]);
        let err = EventValidator::new().validate(&dataset).unwrap_err();

        assert_eq!(err, ValidationError::malformed_row(2, COLUMN_COUNT, 6));
    }

    #[test]
    fn test_long_row_is_malformed() {
        let mut long = valid_row();
        long.push("extra".to_string());

        let dataset = EventDataset::new(expected_header(), vec![long]);
        let err = EventValidator::new().validate(&dataset).unwrap_err();

        assert_eq!(err, ValidationError::malformed_row(1, COLUMN_COUNT, 8));
    }
}
