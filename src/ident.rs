//! Identifier validation.
//!
//! Column and table names arrive from callers at runtime and cannot be
//! bound as parameters (placeholders stand in for values, never for
//! identifiers), so this grammar check is the sole barrier between a
//! caller-supplied name and the emitted SQL.

use crate::error::{SybilError, SybilResult};

/// Accept a bare or dot-qualified SQL identifier, rejecting everything else.
///
/// Grammar: an ASCII letter or underscore, then any number of letters,
/// digits, or underscores; optionally a single `.` and a second segment of
/// the same shape. Surrounding whitespace is trimmed before validation and
/// the trimmed name is returned.
///
/// ```
/// use sybil::ident::validate_identifier;
///
/// assert!(validate_identifier("user_id").is_ok());
/// assert!(validate_identifier("t.user_id").is_ok());
/// assert!(validate_identifier("user; DROP TABLE x").is_err());
/// ```
pub fn validate_identifier(name: &str) -> SybilResult<&str> {
    let trimmed = name.trim();
    let mut segments = trimmed.split('.');
    let valid = match (segments.next(), segments.next(), segments.next()) {
        (Some(first), None, None) => is_segment(first),
        (Some(first), Some(second), None) => is_segment(first) && is_segment(second),
        _ => false,
    };
    if valid {
        Ok(trimmed)
    } else {
        Err(SybilError::InvalidIdentifier(name.to_string()))
    }
}

fn is_segment(segment: &str) -> bool {
    let mut chars = segment.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
