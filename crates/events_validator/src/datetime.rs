//! ISO-8601 date-time parsing for the `timestamp` column.
//!
//! Accepted forms:
//!
//! - `YYYY-MM-DD`
//! - `YYYY-MM-DD<sep>HH[:MM[:SS[.fff...]]]` where `<sep>` is any single character
//! - the same time in basic form, `HH[MM[SS[.fff...]]]`
//! - either of the above followed by an offset `±HH[[:]MM[[:]SS[.ffffff]]]`
//!
//! A time uses colons throughout or not at all. A trailing `Z` is read as
//! `+00:00`. Calendar and clock ranges are checked through chrono, so
//! `2024-02-30` or `25:00` are rejected.

use chrono::{FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;
use std::sync::LazyLock;

static DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{4})-(\d{2})-(\d{2})$").expect("date pattern is valid")
});

static TIME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(\d{2})(?:(:?)(\d{2})(?:(:?)(\d{2})(?:[.,](\d+))?)?)?(?:([+-])(\d{2})(?::?(\d{2})(?::?(\d{2})(?:\.(\d{1,6}))?)?)?)?$",
    )
    .expect("time pattern is valid")
});

/// Parses an ISO-8601 date or date-time into its wall-clock value and offset.
///
/// Returns `None` for anything that is not a well-formed, in-range value.
fn parse_iso8601(value: &str) -> Option<(NaiveDateTime, Option<FixedOffset>)> {
    let normalized = match value.strip_suffix('Z') {
        Some(rest) => format!("{rest}+00:00"),
        None => value.to_string(),
    };

    let date = parse_date(normalized.get(..10)?)?;
    let rest = &normalized[10..];

    let Some(separator) = rest.chars().next() else {
        return Some((date.and_hms_opt(0, 0, 0)?, None));
    };

    let (time, offset) = parse_time(&rest[separator.len_utf8()..])?;
    Some((date.and_time(time), offset))
}

/// Returns true if `value` is a valid ISO-8601 date or date-time.
pub fn is_iso8601(value: &str) -> bool {
    parse_iso8601(value).is_some()
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    let caps = DATE_RE.captures(value)?;
    let year: i32 = caps[1].parse().ok()?;
    let month: u32 = caps[2].parse().ok()?;
    let day: u32 = caps[3].parse().ok()?;

    // year 0 is not a valid calendar year here
    if year < 1 {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month, day)
}

fn parse_time(value: &str) -> Option<(NaiveTime, Option<FixedOffset>)> {
    let caps = TIME_RE.captures(value)?;
    let number = |i: usize| -> Option<u32> {
        caps.get(i).map_or(Some(0), |m| m.as_str().parse().ok())
    };

    // 10:3045 and 1030:45 mix the extended and basic forms
    if let (Some(first), Some(second)) = (caps.get(2), caps.get(4)) {
        if first.as_str() != second.as_str() {
            return None;
        }
    }

    let hour = number(1)?;
    let minute = number(3)?;
    let second = number(5)?;
    let micros = caps.get(6).map_or(Some(0), |m| fraction_to_micros(m.as_str()))?;

    // from_hms_micro_opt treats micros >= 1_000_000 as a leap second
    let time = NaiveTime::from_hms_micro_opt(hour, minute, second, micros)?;

    let offset = match caps.get(7) {
        None => None,
        Some(sign) => {
            let hours = number(8)?;
            let minutes = number(9)?;
            let seconds = number(10)?;
            if minutes >= 60 || seconds >= 60 {
                return None;
            }
            let total = i32::try_from(hours * 3600 + minutes * 60 + seconds).ok()?;
            let total = if sign.as_str() == "-" { -total } else { total };
            Some(FixedOffset::east_opt(total)?)
        }
    };

    Some((time, offset))
}

/// Converts a fractional-second digit string to microseconds, truncating
/// anything past six digits.
fn fraction_to_micros(digits: &str) -> Option<u32> {
    let mut padded: String = digits.chars().take(6).collect();
    while padded.len() < 6 {
        padded.push('0');
    }
    padded.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zulu_timestamp() {
        let (datetime, offset) = parse_iso8601("2024-01-01T00:00:00Z").unwrap();
        assert_eq!(offset, FixedOffset::east_opt(0));
        assert_eq!(datetime.to_string(), "2024-01-01 00:00:00");
    }

    #[test]
    fn test_accepted_forms() {
        for value in [
            "2024-01-01",
            "2024-01-01T10",
            "2024-01-01T10:30",
            "2024-01-01T1030",
            "2024-01-01T10:30:45",
            "2024-01-01T103045",
            "2024-01-01 10:30:45",
            "2024-01-01T10:30:45.5",
            "2024-01-01T10:30:45.123456789",
            "2024-01-01T10:30:45+05:30",
            "2024-01-01T10:30:45-0800",
            "2024-01-01T10:30:45.250+01:00",
            "2024-02-29T23:59:59Z",
        ] {
            assert!(is_iso8601(value), "expected valid: {value}");
        }
    }

    #[test]
    fn test_rejected_forms() {
        for value in [
            "bad-date",
            "",
            "2024-1-01",
            "2024/01/01",
            "2024-13-01",
            "2023-02-29",
            "0000-01-01",
            "2024-01-01T",
            "2024-01-01T25:00:00",
            "2024-01-01T10:60",
            "2024-01-01T10:30:45+24:00",
            "2024-01-01T10:30:45+05:75",
            "2024-01-01T10:30:45ZZ",
            "01/01/2024 10:00",
            "1704067200",
        ] {
            assert!(!is_iso8601(value), "expected invalid: {value}");
        }
    }

    #[test]
    fn test_negative_offset() {
        let (_, offset) = parse_iso8601("2024-06-15T08:00:00-05:00").unwrap();
        assert_eq!(offset, FixedOffset::west_opt(5 * 3600));
    }

    #[test]
    fn test_basic_format_time() {
        for value in [
            "2024-01-01T1030",
            "2024-01-01T103045",
            "2024-01-01T103045.5",
            "2024-01-01T103045+0530",
            "2024-01-01 103045Z",
        ] {
            assert!(is_iso8601(value), "expected valid: {value}");
        }

        let (datetime, _) = parse_iso8601("2024-01-01T103045").unwrap();
        assert_eq!(datetime.to_string(), "2024-01-01 10:30:45");

        for value in [
            "2024-01-01T10:3045",
            "2024-01-01T1030:45",
            "2024-01-01T103",
            "2024-01-01T2530",
        ] {
            assert!(!is_iso8601(value), "expected invalid: {value}");
        }
    }

    #[test]
    fn test_fraction_truncated_to_micros() {
        assert_eq!(fraction_to_micros("5"), Some(500_000));
        assert_eq!(fraction_to_micros("123456789"), Some(123_456));
    }
}
