//! Generative-language backend configuration.

use serde::{Deserialize, Serialize};

/// Gemini endpoint, sampling, and key settings.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    pub api_base: String,
    pub model: String,
    /// Inline API key. Prefer `api_key_env`.
    pub api_key: Option<String>,
    /// Environment variable holding the API key.
    pub api_key_env: String,
    /// Sampling temperature (valid range: 0.0-2.0).
    pub temperature: f64,
    /// Valid range: 1-8192.
    pub max_output_tokens: u32,
    /// Valid range: 1-100.
    pub top_k: u32,
    pub connect_timeout_secs: u32,
    pub timeout_secs: u32,
    /// Shown in place of a reply when the backend call fails.
    pub fallback_message: String,
}

impl std::fmt::Debug for BackendConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendConfig")
            .field("api_base", &self.api_base)
            .field("model", &self.model)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("api_key_env", &self.api_key_env)
            .field("temperature", &self.temperature)
            .field("max_output_tokens", &self.max_output_tokens)
            .field("top_k", &self.top_k)
            .field("connect_timeout_secs", &self.connect_timeout_secs)
            .field("timeout_secs", &self.timeout_secs)
            .field("fallback_message", &self.fallback_message)
            .finish()
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            api_base: "https://generativelanguage.googleapis.com/v1beta/models".into(),
            model: "gemini-2.0-flash".into(),
            api_key: None,
            api_key_env: "GEMINI_API_KEY".into(),
            temperature: 0.7,
            max_output_tokens: 400,
            top_k: 40,
            connect_timeout_secs: 10,
            timeout_secs: 60,
            fallback_message: "Sorry, I couldn't reach the AI service right now.".into(),
        }
    }
}
