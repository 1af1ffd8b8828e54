//! Null detection.
//!
//! CSV has no null literal: a field counts as missing when nothing but
//! whitespace is left after trimming.

/// Returns true if `value` is empty or whitespace-only.
pub fn is_null(value: &str) -> bool {
    value.trim().is_empty()
}
