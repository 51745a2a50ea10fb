//! Gemini API client struct, request building, and response parsing.

use crate::{build_http_client, resolve_api_key, BackendError};

use super::config::GeminiConfig;

/// Gemini API client.
pub struct GeminiClient {
    pub(crate) config: GeminiConfig,
    pub(crate) http: reqwest::Client,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self, BackendError> {
        let http = build_http_client(config.connect_timeout, config.timeout)?;
        Ok(Self { config, http })
    }

    pub(crate) fn api_url(&self) -> String {
        format!(
            "{}/{}:generateContent",
            self.config.api_base.trim_end_matches('/'),
            self.config.model
        )
    }

    /// Key lookup happens per request so a rotated env var is picked up.
    pub(crate) fn api_key(&self) -> Result<String, BackendError> {
        resolve_api_key(self.config.api_key.as_deref(), &self.config.api_key_env)
    }

    /// Build the JSON request body for a single-prompt generation.
    pub(crate) fn build_request_body(&self, prompt: &str) -> serde_json::Value {
        serde_json::json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
            "generationConfig": {
                "temperature": self.config.temperature,
                "maxOutputTokens": self.config.max_output_tokens,
                "topK": self.config.top_k,
            }
        })
    }

    /// Extract `candidates[0].content.parts[0].text`.
    pub(crate) fn parse_response(&self, json: &serde_json::Value) -> Result<String, BackendError> {
        let candidates = json["candidates"]
            .as_array()
            .ok_or_else(|| BackendError::ParseError("no candidates in response".to_string()))?;

        let first = candidates
            .first()
            .ok_or_else(|| BackendError::ParseError("empty candidates".to_string()))?;

        first["content"]["parts"][0]["text"]
            .as_str()
            .map(String::from)
            .ok_or_else(|| BackendError::ParseError("candidate has no text part".to_string()))
    }
}
