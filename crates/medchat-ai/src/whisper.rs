//! OpenAI Whisper API client for speech-to-text.
//!
//! Used for voice input: a recorded utterance is transcribed to text
//! via the Whisper API.

use std::time::Duration;

use tracing::debug;

use crate::{build_http_client, resolve_api_key, BackendError};

const WHISPER_API_URL: &str = "https://api.openai.com/v1/audio/transcriptions";

/// Whisper API client configuration.
#[derive(Clone)]
pub struct WhisperConfig {
    pub api_key: String,
    pub model: String,
    pub language: Option<String>,
}

impl std::fmt::Debug for WhisperConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WhisperConfig")
            .field("api_key", &"[REDACTED]")
            .field("model", &self.model)
            .field("language", &self.language)
            .finish()
    }
}

impl WhisperConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: "whisper-1".to_string(),
            language: None,
        }
    }

    /// Build a config from the key stored in `env_var`.
    pub fn from_env(env_var: &str) -> Result<Self, BackendError> {
        resolve_api_key(None, env_var).map(Self::new)
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_language(mut self, lang: impl Into<String>) -> Self {
        self.language = Some(lang.into());
        self
    }
}

/// Whisper speech-to-text client.
pub struct WhisperClient {
    config: WhisperConfig,
    http: reqwest::Client,
}

impl WhisperClient {
    pub fn new(config: WhisperConfig) -> Result<Self, BackendError> {
        let http = build_http_client(Duration::from_secs(10), Duration::from_secs(300))?;
        Ok(Self { config, http })
    }

    /// Transcribe audio bytes to text.
    ///
    /// `audio_data` should be valid audio in a supported format
    /// (mp3, mp4, mpeg, mpga, m4a, wav, webm).
    /// `filename` is used for the multipart form (e.g., "audio.wav").
    pub async fn transcribe(&self, audio_data: Vec<u8>, filename: &str) -> Result<String, BackendError> {
        debug!(
            model = %self.config.model,
            size = audio_data.len(),
            "Whisper transcription request"
        );

        let file_part = reqwest::multipart::Part::bytes(audio_data)
            .file_name(filename.to_string())
            .mime_str(mime_for(filename))
            .map_err(|e| BackendError::ApiError(e.to_string()))?;

        let mut form = reqwest::multipart::Form::new()
            .part("file", file_part)
            .text("model", self.config.model.clone());

        if let Some(ref lang) = self.config.language {
            form = form.text("language", lang.clone());
        }

        let response = self
            .http
            .post(WHISPER_API_URL)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .multipart(form)
            .send()
            .await
            .map_err(|e| BackendError::NetworkError(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(BackendError::RateLimited);
        }
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(BackendError::ApiError(format!("HTTP {status}: {text}")));
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| BackendError::ParseError(e.to_string()))?;

        parse_transcript(&json)
    }
}

fn mime_for(filename: &str) -> &'static str {
    match filename.rsplit('.').next() {
        Some("mp3") => "audio/mpeg",
        Some("m4a") => "audio/mp4",
        Some("webm") => "audio/webm",
        Some("ogg") => "audio/ogg",
        _ => "audio/wav",
    }
}

fn parse_transcript(json: &serde_json::Value) -> Result<String, BackendError> {
    json["text"]
        .as_str()
        .map(|t| t.trim().to_string())
        .ok_or_else(|| BackendError::ParseError("no 'text' field in response".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mime_from_extension() {
        assert_eq!(mime_for("clip.mp3"), "audio/mpeg");
        assert_eq!(mime_for("clip.m4a"), "audio/mp4");
        assert_eq!(mime_for("clip.webm"), "audio/webm");
        assert_eq!(mime_for("clip.ogg"), "audio/ogg");
        assert_eq!(mime_for("clip.wav"), "audio/wav");
        assert_eq!(mime_for("clip"), "audio/wav");
    }

    #[test]
    fn transcript_is_trimmed() {
        let json = serde_json::json!({ "text": " Explain how vaccines work \n" });
        assert_eq!(parse_transcript(&json).unwrap(), "Explain how vaccines work");
    }

    #[test]
    fn transcript_without_text_is_parse_error() {
        let json = serde_json::json!({ "error": { "message": "bad audio" } });
        assert!(matches!(
            parse_transcript(&json),
            Err(BackendError::ParseError(_))
        ));
    }

    #[test]
    fn config_debug_redacts_key() {
        let config = WhisperConfig::new("sk-secret").with_language("en");
        let debug = format!("{config:?}");
        assert!(!debug.contains("sk-secret"));
        assert!(debug.contains("\"en\""));
    }

    #[test]
    fn from_env_without_key_fails() {
        let err = WhisperConfig::from_env("MEDCHAT_TEST_UNSET_WHISPER_KEY").unwrap_err();
        assert!(matches!(err, BackendError::MissingApiKey(_)));
    }
}
