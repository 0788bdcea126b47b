//! Parsing of raw query-string values.
//!
//! Listing endpoints accept their filters as strings so that a malformed id
//! is reported as a validation error before any statement is built, instead
//! of being dropped or rejected with an extractor-specific body. An empty
//! string is treated the same as an absent parameter.

use crate::error::CoreError;
use crate::types::DbId;

/// Normalize a raw parameter: trim it and treat blank as absent.
fn present(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|s| !s.is_empty())
}

/// Parse an optional entity id. Ids must be positive integers.
pub fn parse_id(raw: Option<&str>, field: &str) -> Result<Option<DbId>, CoreError> {
    let Some(value) = present(raw) else {
        return Ok(None);
    };
    match value.parse::<DbId>() {
        Ok(id) if id > 0 => Ok(Some(id)),
        _ => Err(CoreError::Validation(format!(
            "'{field}' must be a positive integer id, got '{value}'"
        ))),
    }
}

/// Parse an optional integer (page numbers, limits). Range is not checked
/// here; callers clamp.
pub fn parse_int(raw: Option<&str>, field: &str) -> Result<Option<i64>, CoreError> {
    let Some(value) = present(raw) else {
        return Ok(None);
    };
    value
        .parse::<i64>()
        .map(Some)
        .map_err(|_| CoreError::Validation(format!("'{field}' must be an integer, got '{value}'")))
}

/// Parse an optional boolean flag (`1/0`, `true/false`, `yes/no`).
pub fn parse_flag(raw: Option<&str>, field: &str) -> Result<bool, CoreError> {
    let Some(value) = present(raw) else {
        return Ok(false);
    };
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(CoreError::Validation(format!(
            "'{field}' must be a boolean flag, got '{value}'"
        ))),
    }
}

/// Normalize an optional free-text term; blank input is absent.
pub fn parse_text(raw: Option<&str>) -> Option<String> {
    present(raw).map(str::to_string)
}
