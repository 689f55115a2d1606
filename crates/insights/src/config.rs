use std::time::Duration;

/// Environment variable holding the completion service credential.
pub const API_KEY_VAR: &str = "GROQ_API_KEY";

/// Insight client configuration loaded from environment variables.
///
/// The credential is not stored here. It is read from
/// [`API_KEY_VAR`] on every request.
#[derive(Debug, Clone)]
pub struct InsightsConfig {
    /// Chat-completions endpoint.
    pub api_url: String,
    /// Model identifier sent with each request.
    pub model: String,
    /// Client-side timeout for one completion call.
    pub timeout: Duration,
    /// Name of the variable the credential is read from.
    pub api_key_var: String,
}

impl Default for InsightsConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.groq.com/openai/v1/chat/completions".into(),
            model: "llama-3.1-8b-instant".into(),
            timeout: Duration::from_secs(60),
            api_key_var: API_KEY_VAR.into(),
        }
    }
}

impl InsightsConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                 | Default                                           |
    /// |-------------------------|---------------------------------------------------|
    /// | `INSIGHTS_API_URL`      | `https://api.groq.com/openai/v1/chat/completions` |
    /// | `INSIGHTS_MODEL`        | `llama-3.1-8b-instant`                            |
    /// | `INSIGHTS_TIMEOUT_SECS` | `60`                                              |
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let api_url = std::env::var("INSIGHTS_API_URL").unwrap_or(defaults.api_url);
        let model = std::env::var("INSIGHTS_MODEL").unwrap_or(defaults.model);

        let timeout_secs: u64 = std::env::var("INSIGHTS_TIMEOUT_SECS")
            .unwrap_or_else(|_| "60".into())
            .parse()
            .expect("INSIGHTS_TIMEOUT_SECS must be a valid u64");

        Self {
            api_url,
            model,
            timeout: Duration::from_secs(timeout_secs),
            api_key_var: defaults.api_key_var,
        }
    }
}
