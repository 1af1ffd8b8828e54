//! Header validation.
//!
//! The header must be the expected column list exactly: same length, same
//! names, same order, same case. Nothing is trimmed or reordered.

use crate::ValidationError;
use events_core::{EXPECTED_COLUMNS, expected_header};
use tracing::warn;

/// Checks a header record against the expected schema.
pub struct SchemaChecker;

impl SchemaChecker {
    /// Creates a new schema checker.
    pub fn new() -> Self {
        Self
    }

    /// Returns true if `header` is exactly the expected column list.
    pub fn matches(&self, header: &[String]) -> bool {
        header.len() == EXPECTED_COLUMNS.len()
            && header
                .iter()
                .zip(EXPECTED_COLUMNS)
                .all(|(found, expected)| found == expected)
    }

    /// Checks `header`, returning a schema mismatch error that carries both
    /// the expected and the found header on failure.
    pub fn check(&self, header: &[String]) -> Result<(), ValidationError> {
        if self.matches(header) {
            return Ok(());
        }

        warn!(found = ?header, "Header does not match expected schema");
        Err(ValidationError::schema_mismatch(expected_header(), header))
    }
}

impl Default for SchemaChecker {
    fn default() -> Self {
        Self::new()
    }
}
