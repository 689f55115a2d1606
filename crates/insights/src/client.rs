//! HTTP client for OpenAI-compatible chat-completions endpoints.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::InsightsConfig;

/// Sampling temperature for insight completions.
const TEMPERATURE: f32 = 0.5;

/// Upper bound on generated tokens.
const MAX_TOKENS: u32 = 2000;

/// Errors from the insight completion layer.
#[derive(Debug, thiserror::Error)]
pub enum InsightsError {
    /// No credential is available.
    #[error("Insights API key not configured")]
    NotConfigured,

    /// The HTTP request itself failed (network, DNS, TLS, timeout, decoding).
    #[error("Insights request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The completion service returned a non-2xx status code.
    #[error("Insights API error ({status}): {body}")]
    Upstream {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The completion service answered without any message text.
    #[error("No insights generated")]
    EmptyCompletion,
}

/// A service that turns a system and user prompt into completion text.
#[async_trait]
pub trait CompletionService: Send + Sync {
    async fn complete(&self, system: &str, user: &str) -> Result<String, InsightsError>;

    /// Whether a call could currently be attempted. Reported by `/health`.
    fn is_configured(&self) -> bool {
        true
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    temperature: f32,
    max_tokens: u32,
    response_format: ResponseFormat,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Option<ChoiceMessage>,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// Completion client for Groq (or any OpenAI-compatible endpoint).
pub struct GroqClient {
    client: reqwest::Client,
    config: InsightsConfig,
}

impl GroqClient {
    /// Create a client whose requests time out after `config.timeout`.
    pub fn new(config: InsightsConfig) -> Result<Self, InsightsError> {
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }

    /// Read the credential from the environment, failing when unset or blank.
    fn api_key(&self) -> Result<String, InsightsError> {
        match std::env::var(&self.config.api_key_var) {
            Ok(key) if !key.trim().is_empty() => Ok(key),
            _ => Err(InsightsError::NotConfigured),
        }
    }

    fn request_body<'a>(&'a self, system: &'a str, user: &'a str) -> ChatRequest<'a> {
        ChatRequest {
            model: &self.config.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
            response_format: ResponseFormat {
                kind: "json_object",
            },
        }
    }
}

#[async_trait]
impl CompletionService for GroqClient {
    async fn complete(&self, system: &str, user: &str) -> Result<String, InsightsError> {
        let api_key = self.api_key()?;

        let response = self
            .client
            .post(&self.config.api_url)
            .bearer_auth(api_key)
            .json(&self.request_body(system, user))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(status = status.as_u16(), %body, "Insights API returned an error");
            return Err(InsightsError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let completion: ChatResponse = response.json().await?;
        completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content)
            .filter(|text| !text.trim().is_empty())
            .ok_or(InsightsError::EmptyCompletion)
    }

    fn is_configured(&self) -> bool {
        self.api_key().is_ok()
    }
}
