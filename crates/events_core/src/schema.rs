//! The fixed event schema.
//!
//! An events file always carries the same seven columns in the same order.
//! The column set is closed, so it is modelled as an enum rather than a list
//! of runtime field definitions.

use serde::Serialize;
use std::fmt;

/// Number of columns in an events file.
pub const COLUMN_COUNT: usize = 7;

/// Column names in the order they must appear in the header.
pub const EXPECTED_COLUMNS: [&str; COLUMN_COUNT] = [
    "event_id",
    "timestamp",
    "user_id",
    "ip",
    "country",
    "event_type",
    "amount",
];

/// Values accepted in the `event_type` column.
pub const ALLOWED_EVENT_TYPES: [&str; 3] = ["login", "change_password", "payment"];

/// One column of the events schema.
///
/// Serializes to its header name (`"event_id"`, `"user_id"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Column {
    /// Event identifier, `e` followed by at least one character
    EventId,
    /// ISO-8601 date-time of the event
    Timestamp,
    /// User identifier, `u_` followed by at least one character
    UserId,
    /// IPv4 or IPv6 address of the client
    Ip,
    /// Two-letter country code
    Country,
    /// One of [`ALLOWED_EVENT_TYPES`]
    EventType,
    /// Floating-point amount
    Amount,
}

impl Column {
    /// All columns in schema order.
    pub const ALL: [Column; COLUMN_COUNT] = [
        Column::EventId,
        Column::Timestamp,
        Column::UserId,
        Column::Ip,
        Column::Country,
        Column::EventType,
        Column::Amount,
    ];

    /// Returns the header name of this column.
    pub fn name(self) -> &'static str {
        EXPECTED_COLUMNS[self.index()]
    }

    /// Returns the zero-based position of this column in a row.
    pub fn index(self) -> usize {
        match self {
            Column::EventId => 0,
            Column::Timestamp => 1,
            Column::UserId => 2,
            Column::Ip => 3,
            Column::Country => 4,
            Column::EventType => 5,
            Column::Amount => 6,
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returns the expected header as owned strings.
pub fn expected_header() -> Vec<String> {
    EXPECTED_COLUMNS.iter().map(|c| c.to_string()).collect()
}
