//! # Events Core
//!
//! Core data structures for the event dataset validator.
//!
//! An events file is a CSV table with a fixed seven-column header. This crate
//! holds the types shared by the reader, the validation engine and the CLI:
//!
//! - **Column**: the closed set of columns and their header order
//! - **EventDataset**: a header plus raw, untrimmed data rows
//! - **FailureRecord / RunState**: what a validation pass accumulates
//! - **Report**: the terminal summary, printable and serializable
//!
//! ## Example
//!
//! ```rust
//! use events_core::{Column, FailureRecord, Report, RowOutcome, RunState};
//!
//! let state = RunState::schema_accepted().record(RowOutcome {
//!     row: 1,
//!     failures: vec![FailureRecord::invalid(1, Column::EventId, "x1")],
//! });
//!
//! let report = Report::from_state(&state);
//! assert_eq!(report.summary.failed_rows, 1);
//! println!("{report}");
//! ```

pub mod dataset;
pub mod error;
pub mod report;
pub mod schema;
pub mod state;

pub use dataset::*;
pub use error::*;
pub use report::*;
pub use schema::*;
pub use state::*;
