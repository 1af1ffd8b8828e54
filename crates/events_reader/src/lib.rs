//! CSV reader for event datasets.
//!
//! This crate loads an events file into an [`EventDataset`]: the first
//! record becomes the header, every following record a raw row. Fields are
//! kept exactly as written (no trimming), and records of uneven length are
//! passed through so the validator can reject them.
//!
//! Blank lines are skipped by the CSV parser. They are not data rows, so
//! they neither count toward the row total nor shift row numbers.
//!
//! # Example
//!
//! ```rust
//! use events_reader::parse_csv_str;
//!
//! let csv = "event_id,timestamp,user_id,ip,country,event_type,amount\n\
//!            e1,2024-01-01T00:00:00Z,u_42,127.0.0.1,US,login,9.99\n";
//!
//! let dataset = parse_csv_str(csv).expect("Failed to parse CSV");
//! assert_eq!(dataset.header()[0], "event_id");
//! assert_eq!(dataset.len(), 1);
//! ```

use events_core::{EventDataset, RawRow};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while reading an events file.
#[derive(Debug, Error)]
pub enum ReaderError {
    /// The file could not be opened
    #[error("Failed to open '{}': {source}", path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    /// CSV syntax or read error
    #[error("Failed to read CSV: {0}")]
    Csv(#[from] csv::Error),

    /// The input has no records at all, not even a header
    #[error("Input has no header row")]
    MissingHeader,
}

/// Result type alias for reader operations.
pub type Result<T> = std::result::Result<T, ReaderError>;

const UTF8_BOM: char = '\u{feff}';

/// Read an events dataset from any reader.
///
/// # Errors
///
/// Returns `ReaderError::Csv` on malformed CSV or I/O failure and
/// `ReaderError::MissingHeader` if the input is empty.
pub fn read_csv<R: Read>(source: R) -> Result<EventDataset> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(source);

    let mut records = reader.records();

    let mut header = match records.next() {
        Some(record) => to_row(&record?),
        None => return Err(ReaderError::MissingHeader),
    };
    if let Some(first) = header.first_mut() {
        if let Some(stripped) = first.strip_prefix(UTF8_BOM) {
            *first = stripped.to_string();
        }
    }

    let mut dataset = EventDataset::with_header(header);
    for record in records {
        dataset.add_row(to_row(&record?));
    }

    debug!(rows = dataset.len(), "Loaded events CSV");
    Ok(dataset)
}

/// Read an events dataset from an in-memory CSV string.
pub fn parse_csv_str(content: &str) -> Result<EventDataset> {
    read_csv(content.as_bytes())
}

/// Read an events dataset from a file.
///
/// # Example
///
/// ```no_run
/// use events_reader::read_file;
/// use std::path::Path;
///
/// let dataset = read_file(Path::new("events.csv")).unwrap();
/// println!("Loaded {} rows", dataset.len());
/// ```
pub fn read_file(path: &Path) -> Result<EventDataset> {
    let file = File::open(path).map_err(|source| ReaderError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    read_csv(file)
}

fn to_row(record: &csv::StringRecord) -> RawRow {
    record.iter().map(String::from).collect()
}
