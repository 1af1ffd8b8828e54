//! Per-column format rules.
//!
//! Each rule takes an already trimmed, non-null value and answers valid or
//! invalid. Rules are pure and know nothing about the row they came from.
//!
//! - `event_id`: `e` prefix plus at least one more character
//! - `timestamp`: ISO-8601 date-time (see [`crate::datetime`])
//! - `user_id`: `u_` prefix plus at least one more character
//! - `ip`: IPv4 or IPv6 literal
//! - `country`: exactly two alphabetic characters
//! - `event_type`: one of the allowed event types, case-sensitive
//! - `amount`: floating-point number

use crate::datetime::is_iso8601;
use events_core::{ALLOWED_EVENT_TYPES, Column};
use std::net::IpAddr;

/// Checks `value` against the rule of `column`.
pub fn validate_value(column: Column, value: &str) -> bool {
    match column {
        Column::EventId => is_valid_event_id(value),
        Column::Timestamp => is_valid_timestamp(value),
        Column::UserId => is_valid_user_id(value),
        Column::Ip => is_valid_ip(value),
        Column::Country => is_valid_country(value),
        Column::EventType => is_valid_event_type(value),
        Column::Amount => is_valid_amount(value),
    }
}

pub fn is_valid_event_id(value: &str) -> bool {
    has_non_empty_suffix(value, "e")
}

pub fn is_valid_timestamp(value: &str) -> bool {
    is_iso8601(value)
}

pub fn is_valid_user_id(value: &str) -> bool {
    has_non_empty_suffix(value, "u_")
}

pub fn is_valid_ip(value: &str) -> bool {
    value.parse::<IpAddr>().is_ok()
}

/// Two characters, both alphabetic in any script or case.
pub fn is_valid_country(value: &str) -> bool {
    value.chars().count() == 2 && value.chars().all(char::is_alphabetic)
}

pub fn is_valid_event_type(value: &str) -> bool {
    ALLOWED_EVENT_TYPES.contains(&value)
}

/// Decimal or scientific notation with an optional sign. `inf` and `nan`
/// spellings are numbers too.
pub fn is_valid_amount(value: &str) -> bool {
    value.parse::<f64>().is_ok()
}

fn has_non_empty_suffix(value: &str, prefix: &str) -> bool {
    value
        .strip_prefix(prefix)
        .is_some_and(|rest| !rest.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_id() {
        assert!(is_valid_event_id("e1"));
        assert!(is_valid_event_id("evt_001"));
        assert!(!is_valid_event_id("e"));
        assert!(!is_valid_event_id("x1"));
        assert!(!is_valid_event_id("E1"));
    }

    #[test]
    fn test_user_id() {
        assert!(is_valid_user_id("u_42"));
        assert!(is_valid_user_id("u_x"));
        assert!(!is_valid_user_id("u_"));
        assert!(!is_valid_user_id("u42"));
        assert!(!is_valid_user_id("user_42"));
    }

    #[test]
    fn test_ip() {
        assert!(is_valid_ip("127.0.0.1"));
        assert!(is_valid_ip("0.0.0.0"));
        assert!(is_valid_ip("::1"));
        assert!(is_valid_ip("2001:db8::8a2e:370:7334"));
        assert!(!is_valid_ip("256.0.0.1"));
        assert!(!is_valid_ip("127.0.0"));
        assert!(!is_valid_ip("localhost"));
        assert!(!is_valid_ip("2001:db8:::1"));
    }

    #[test]
    fn test_country() {
        assert!(is_valid_country("US"));
        assert!(is_valid_country("de"));
        assert!(is_valid_country("Öß"));
        assert!(!is_valid_country("USA"));
        assert!(!is_valid_country("U"));
        assert!(!is_valid_country("U1"));
        assert!(!is_valid_country("U "));
    }

    #[test]
    fn test_event_type() {
        assert!(is_valid_event_type("login"));
        assert!(is_valid_event_type("change_password"));
        assert!(is_valid_event_type("payment"));
        assert!(!is_valid_event_type("Login"));
        assert!(!is_valid_event_type("logout"));
        assert!(!is_valid_event_type("payment "));
    }

    #[test]
    fn test_amount() {
        for value in ["9.99", "0", "-3", "+3.5", "1e3", "2.5E-4", ".5", "5.", "inf", "NaN"] {
            assert!(is_valid_amount(value), "expected valid: {value}");
        }
        for value in ["abc", "9,99", "1e", "--1", "$5", "."] {
            assert!(!is_valid_amount(value), "expected invalid: {value}");
        }
    }

    #[test]
    fn test_dispatch_by_column() {
        let valid = [
            (Column::EventId, "e1"),
            (Column::Timestamp, "2024-01-01T00:00:00Z"),
            (Column::UserId, "u_42"),
            (Column::Ip, "127.0.0.1"),
            (Column::Country, "US"),
            (Column::EventType, "login"),
            (Column::Amount, "9.99"),
        ];
        for (column, value) in valid {
            assert!(validate_value(column, value), "{column} should accept {value}");
        }

        assert!(!validate_value(Column::Timestamp, "bad-date"));
        assert!(!validate_value(Column::Country, "login"));
    }
}
