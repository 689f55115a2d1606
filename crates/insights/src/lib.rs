//! Insight generation for workspace content.
//!
//! Sends workspace data to an OpenAI-compatible chat-completions endpoint
//! and turns the reply into a fixed-shape [`Insights`] object, tolerating
//! models that wrap their JSON in markdown or ignore the schema.

pub mod client;
pub mod config;
pub mod insight;
pub mod parse;
pub mod prompt;

pub use client::{CompletionService, GroqClient, InsightsError};
pub use config::InsightsConfig;
pub use insight::{Insights, PriorityBreakdown};

/// Whether `content` carries nothing worth analysing: null, a bare number
/// or boolean, or an empty object, array or string.
pub fn is_empty_content(content: &serde_json::Value) -> bool {
    use serde_json::Value;
    match content {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::String(text) => text.is_empty(),
        Value::Bool(_) | Value::Number(_) => true,
    }
}

/// Generate insights for `content` using the given completion service.
///
/// Callers are expected to reject empty content (see [`is_empty_content`])
/// before calling, so the service is never asked about nothing.
pub async fn generate_insights(
    service: &dyn CompletionService,
    content: &serde_json::Value,
) -> Result<Insights, InsightsError> {
    let user = prompt::user_prompt(content);
    let text = service.complete(prompt::SYSTEM_PROMPT, &user).await?;
    Ok(parse::parse_insights(&text))
}
