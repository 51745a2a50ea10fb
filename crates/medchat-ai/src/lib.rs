//! AI backend for medchat.
//!
//! Provides the `CompletionBackend` boundary the conversation talks to,
//! a Gemini implementation of it, and a Whisper speech-to-text client.

pub mod gemini;
pub mod whisper;

use async_trait::async_trait;

pub use gemini::{GeminiClient, GeminiConfig};
pub use whisper::{WhisperClient, WhisperConfig};

/// A text-in, text-out generative backend.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, BackendError>;
}

#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("API error: {0}")]
    ApiError(String),
    #[error("Rate limited")]
    RateLimited,
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("API key not configured: {0}")]
    MissingApiKey(String),
    #[error("HTTP client error: {0}")]
    ClientBuild(String),
}

/// Resolve an API key: inline value first, then the named environment variable.
pub(crate) fn resolve_api_key(inline: Option<&str>, env_var: &str) -> Result<String, BackendError> {
    if let Some(key) = inline.filter(|k| !k.trim().is_empty()) {
        return Ok(key.to_string());
    }
    match std::env::var(env_var) {
        Ok(key) if !key.trim().is_empty() => Ok(key),
        _ => Err(BackendError::MissingApiKey(env_var.to_string())),
    }
}

pub(crate) fn build_http_client(
    connect_timeout: std::time::Duration,
    timeout: std::time::Duration,
) -> Result<reqwest::Client, BackendError> {
    reqwest::Client::builder()
        .connect_timeout(connect_timeout)
        .timeout(timeout)
        .build()
        .map_err(|e| BackendError::ClientBuild(e.to_string()))
}
