//! # Events Validator
//!
//! Validation engine for event datasets. This crate checks a loaded events
//! file against the fixed seven-column schema:
//!
//! - Schema check (exact header match, fatal on mismatch)
//! - Null check (empty or whitespace-only fields)
//! - Type/format checks (identifiers, ISO-8601 timestamps, IP addresses,
//!   country codes, amounts)
//! - Allowed values check (`event_type`)
//!
//! ## Example
//!
//! ```rust
//! use events_core::{EventDataset, expected_header};
//! use events_validator::{EventValidator, ValidationError};
//!
//! let dataset = EventDataset::with_header(expected_header());
//!
//! match EventValidator::new().validate(&dataset) {
//!     Ok(report) => println!("{report}"),
//!     Err(ValidationError::SchemaMismatch { expected, found }) => {
//!         eprintln!("expected {expected:?}, found {found:?}");
//!     }
//!     Err(other) => eprintln!("{other}"),
//! }
//! ```

pub mod columns;
pub mod datetime;
mod engine;
mod error;
pub mod nulls;
mod row;
mod schema;

pub use engine::*;
pub use error::*;
pub use row::*;
pub use schema::*;
