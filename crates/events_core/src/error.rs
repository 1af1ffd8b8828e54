//! Error types for report persistence.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type for report operations.
pub type Result<T> = std::result::Result<T, ReportError>;

/// Errors raised while writing a report.
#[derive(Error, Debug)]
pub enum ReportError {
    /// The report file could not be created or written
    #[error("Report I/O error at '{}': {source}", path.display())]
    Io {
        /// File the operation targeted
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ReportError {
    /// Creates a new I/O error for `path`.
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}
