//! Boundary field helpers.
//!
//! Request bodies are deserialized into loosely-typed payloads and then
//! validated into typed commands. These helpers hold the shared rules:
//! trimming, required/blank checks and defensive integer parsing.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::{codes, CoreError};
use crate::types::DbId;

/// An integer field as it arrives in a JSON body.
///
/// Accepts a JSON integer or a string holding a base-10 integer. Anything
/// else (floats, booleans, `"12abc"`) is rejected by [`RawInt::parse`]
/// instead of being coerced.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct RawInt(Value);

impl RawInt {
    /// Parse into an `i64`, failing with the given `INVALID_*` code.
    pub fn parse(&self, code: &'static str, field: &'static str) -> Result<i64, CoreError> {
        let parsed = match &self.0 {
            Value::Number(n) => n.as_i64(),
            Value::String(s) => parse_int(s),
            _ => None,
        };
        parsed.ok_or_else(|| CoreError::invalid(code, format!("{field} must be a valid integer")))
    }
}

impl From<i64> for RawInt {
    fn from(value: i64) -> Self {
        RawInt(Value::from(value))
    }
}

impl From<&str> for RawInt {
    fn from(value: &str) -> Self {
        RawInt(Value::from(value))
    }
}

/// Strict base-10 integer parse of a trimmed string.
pub fn parse_int(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok()
}

/// Parse a record id taken from a path segment or query parameter.
pub fn parse_id(raw: &str, code: &'static str, field: &'static str) -> Result<DbId, CoreError> {
    parse_int(raw).ok_or_else(|| CoreError::invalid(code, format!("Valid {field} is required")))
}

/// Require a text field on create: absent or blank fails with `MISSING_FIELD`.
pub fn required_text(field: &'static str, value: Option<String>) -> Result<String, CoreError> {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(CoreError::MissingField { field }),
    }
}

/// Validate a text field supplied on update: blank fails with `code`.
pub fn non_blank(field: &'static str, code: &'static str, value: String) -> Result<String, CoreError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CoreError::invalid(code, format!("{field} must not be empty")));
    }
    Ok(trimmed.to_string())
}

/// Trim optional free text; blank becomes `None`.
pub fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Deserialize a field that distinguishes "absent" from "explicit null".
///
/// Use with `#[serde(default, deserialize_with = "nullable")]` on an
/// `Option<Option<T>>`: absent yields `None`, `null` yields `Some(None)`.
pub fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Default message for a missing JSON body or one that failed to parse.
pub fn invalid_body(detail: impl std::fmt::Display) -> CoreError {
    CoreError::invalid(codes::INVALID_BODY, format!("Invalid request body: {detail}"))
}
