//! Single-shot voice capture backed by Whisper transcription.

use std::path::Path;

use medchat_ai::{BackendError, WhisperClient, WhisperConfig};
use medchat_config::schema::SpeechConfig;
use tracing::{debug, info};

#[derive(Debug, thiserror::Error)]
pub enum SpeechError {
    #[error("{0}")]
    Unavailable(String),
    #[error("failed to read recording {path}: {source}")]
    Recording {
        path: String,
        source: std::io::Error,
    },
    #[error("speech recognition failed: {0}")]
    Recognition(#[from] BackendError),
    #[error("no speech detected")]
    NoSpeech,
}

/// Speech-to-text capability, present or not.
pub enum SpeechCapture {
    Available(WhisperClient),
    /// Reason shown to the user.
    Unavailable(String),
}

impl SpeechCapture {
    pub fn from_config(config: &SpeechConfig) -> Self {
        if !config.enabled {
            return SpeechCapture::Unavailable(
                "Voice input is disabled. Set [speech] enabled = true in the config to use /voice."
                    .into(),
            );
        }

        let whisper_config = match WhisperConfig::from_env(&config.api_key_env) {
            Ok(c) => c.with_model(config.model.clone()),
            Err(_) => {
                return SpeechCapture::Unavailable(format!(
                    "Voice input is not available. Set {} to enable speech recognition.",
                    config.api_key_env
                ));
            }
        };
        let whisper_config = match &config.language {
            Some(lang) => whisper_config.with_language(lang.clone()),
            None => whisper_config,
        };

        match WhisperClient::new(whisper_config) {
            Ok(client) => SpeechCapture::Available(client),
            Err(e) => SpeechCapture::Unavailable(format!("Voice input is not available: {e}")),
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, SpeechCapture::Available(_))
    }

    /// Transcribe one recorded utterance.
    pub async fn capture(&self, recording: &Path) -> Result<String, SpeechError> {
        let client = match self {
            SpeechCapture::Available(client) => client,
            SpeechCapture::Unavailable(reason) => {
                return Err(SpeechError::Unavailable(reason.clone()));
            }
        };

        info!(path = %recording.display(), "listening");
        let audio = tokio::fs::read(recording)
            .await
            .map_err(|source| SpeechError::Recording {
                path: recording.display().to_string(),
                source,
            })?;

        let filename = recording
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "audio.wav".to_string());

        let transcript = client.transcribe(audio, &filename).await?;
        debug!(chars = transcript.len(), "transcribed");
        if transcript.is_empty() {
            return Err(SpeechError::NoSpeech);
        }
        Ok(transcript)
    }
}
