//! Error types for validation operations.
//!
//! Only conditions that stop a run are errors. An invalid field is not an
//! error: it becomes a [`FailureRecord`](events_core::FailureRecord) in the
//! report.

use thiserror::Error;

/// Result type for validation operations.
pub type Result<T> = std::result::Result<T, ValidationError>;

/// Fatal errors that abort a validation run before a report exists.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Header does not match the expected schema
    #[error("Schema check FAILED!\nExpected: {expected:?}\nFound: {found:?}")]
    SchemaMismatch {
        expected: Vec<String>,
        found: Vec<String>,
    },

    /// A data row does not have one field per schema column
    #[error("Malformed row {row}: expected {expected} fields, found {found}")]
    MalformedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
}

impl ValidationError {
    /// Creates a new schema mismatch error.
    pub fn schema_mismatch(expected: Vec<String>, found: &[String]) -> Self {
        Self::SchemaMismatch {
            expected,
            found: found.to_vec(),
        }
    }

    /// Creates a new malformed row error.
    pub fn malformed_row(row: usize, expected: usize, found: usize) -> Self {
        Self::MalformedRow {
            row,
            expected,
            found,
        }
    }
}
