//! Input character classes for staged edits.
//!
//! Rejected input is handled by the caller with a reject-and-keep-previous
//! policy; these helpers only decide acceptance.

/// Letters and whitespace only — the class shared by name and country input.
pub fn is_name_like(s: &str) -> bool {
    s.chars()
        .all(|c| c.is_ascii_alphabetic() || c.is_whitespace())
}

/// Parse raw age input.
///
/// A trailing `" Years"` unit suffix is stripped. The remainder must be
/// all-digit or empty; empty normalizes to zero. Returns `None` for
/// anything else (including values that overflow `i32`).
pub fn parse_age_input(raw: &str) -> Option<i32> {
    let digits = raw.strip_suffix(" Years").unwrap_or(raw);
    if digits.is_empty() {
        return Some(0);
    }
    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}
