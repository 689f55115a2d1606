//! Lenient parsing of completion text into [`Insights`].
//!
//! Order: the whole text as JSON, then the first fenced code block, then a
//! fallback holding a prefix of the raw text. A JSON value that is not an
//! object counts as a failed parse.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Map, Value};

use crate::insight::Insights;

/// Characters of raw text kept when nothing parses.
pub const FALLBACK_SUMMARY_CHARS: usize = 300;

/// Matches a ```` ``` ```` or ```` ```json ```` fenced block, capturing its body.
static FENCED_BLOCK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"```(?:json)?\s*([\s\S]*?)\s*```").expect("valid regex"));

/// Parse completion text, never failing.
pub fn parse_insights(text: &str) -> Insights {
    if let Some(object) = parse_object(text) {
        return Insights::from_object(&object);
    }

    tracing::warn!(raw = %text, "Completion is not a JSON object, trying fenced block");

    if let Some(object) = fenced_block(text).and_then(parse_object) {
        return Insights::from_object(&object);
    }

    tracing::warn!("No parsable JSON in completion, falling back to raw text");
    Insights::summary_only(text.chars().take(FALLBACK_SUMMARY_CHARS).collect())
}

fn parse_object(text: &str) -> Option<Map<String, Value>> {
    match serde_json::from_str(text) {
        Ok(Value::Object(object)) => Some(object),
        _ => None,
    }
}

fn fenced_block(text: &str) -> Option<&str> {
    FENCED_BLOCK_RE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}
