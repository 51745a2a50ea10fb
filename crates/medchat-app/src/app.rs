//! Wiring config into a session, and the interactive event loop.

use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

use medchat_ai::{GeminiClient, GeminiConfig};
use medchat_chat::{
    ConversationSession, QueryRouter, ResponseFormatter, RevealPacing, RevealRenderer, Surface,
};
use medchat_common::MedchatError;
use medchat_config::MedchatConfig;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

use crate::input::{InputEvent, InputSurface, SurfaceAction};
use crate::terminal::TerminalSurface;
use crate::voice::{SpeechCapture, SpeechError};

/// Gemini client settings from the `[backend]` section.
pub fn gemini_config(config: &MedchatConfig) -> GeminiConfig {
    let b = &config.backend;
    let gemini = GeminiConfig::default()
        .with_api_base(b.api_base.clone())
        .with_api_key_env(b.api_key_env.clone())
        .with_model(b.model.clone())
        .with_temperature(b.temperature)
        .with_max_output_tokens(b.max_output_tokens)
        .with_top_k(b.top_k)
        .with_timeouts(
            Duration::from_secs(u64::from(b.connect_timeout_secs)),
            Duration::from_secs(u64::from(b.timeout_secs)),
        );
    match &b.api_key {
        Some(key) => gemini.with_api_key(key.clone()),
        None => gemini,
    }
}

/// Build a conversation session from config.
pub fn build_session(config: &MedchatConfig) -> Result<ConversationSession, MedchatError> {
    let backend = GeminiClient::new(gemini_config(config))
        .map_err(|e| MedchatError::Backend(e.to_string()))?;

    let router = QueryRouter::new(&config.router.keywords, config.router.search_base_url.clone())
        .map_err(|e| MedchatError::Router(e.to_string()))?;

    let pacing = RevealPacing::from_millis(
        u64::from(config.reveal.word_interval_ms),
        u64::from(config.reveal.item_interval_ms),
    );

    Ok(ConversationSession::new(Arc::new(backend), router)
        .with_formatter(ResponseFormatter::new(config.formatter.max_items))
        .with_renderer(RevealRenderer::new(pacing))
        .with_follow_up_marker(config.conversation.follow_up_marker.clone())
        .with_placeholder(config.conversation.placeholder.clone())
        .with_fallback_message(config.backend.fallback_message.clone()))
}

/// The chat window: session, input controls, voice, and terminal output.
pub struct ChatApp<W: Write> {
    session: ConversationSession,
    input: InputSurface,
    speech: SpeechCapture,
    surface: TerminalSurface<W>,
}

impl<W: Write> ChatApp<W> {
    pub fn new(session: ConversationSession, speech: SpeechCapture, surface: TerminalSurface<W>) -> Self {
        Self {
            session,
            input: InputSurface::new(),
            speech,
            surface,
        }
    }

    /// Run a single turn and return.
    pub async fn run_once(&mut self, prompt: &str) {
        self.session.run_turn(&mut self.surface, prompt).await;
        self.surface.finish();
    }

    /// Process input until the window is closed.
    ///
    /// Events pass through a single-slot channel and each turn is awaited
    /// before the next event is taken, so replies never interleave.
    pub async fn run(&mut self) {
        if !self.speech.is_available() {
            warn!("speech recognition is not available; /voice will explain how to enable it");
        }
        self.surface
            .notice("Ask a health question. /voice <recording> to speak, /close to exit.");

        let (tx, mut rx) = mpsc::channel(1);
        tokio::spawn(read_input(tx));

        self.surface.prompt();
        while let Some(event) = rx.recv().await {
            self.handle(event).await;
            if !self.input.is_visible() {
                break;
            }
            self.surface.prompt();
        }

        info!(turns = self.session.turns_completed(), "chat window closed");
    }

    /// Apply one input event; a close hides the input surface.
    pub async fn handle(&mut self, event: InputEvent) {
        match self.input.handle(event) {
            SurfaceAction::Submit(text) => {
                self.session.run_turn(&mut self.surface, &text).await;
            }
            SurfaceAction::Capture(path) => self.capture(&path).await,
            SurfaceAction::MissingRecording => {
                self.surface.alert("Usage: /voice <path to recorded audio>");
            }
            SurfaceAction::Close => debug!("close requested"),
        }
    }

    async fn capture(&mut self, path: &std::path::Path) {
        match self.speech.capture(path).await {
            Ok(transcript) => {
                let action = self.input.handle(InputEvent::VoiceCaptured(transcript));
                debug!(field = self.input.field().content(), "voice transcript placed in input");
                if let SurfaceAction::Submit(text) = action {
                    self.session.run_turn(&mut self.surface, &text).await;
                }
            }
            Err(SpeechError::Unavailable(reason)) => self.surface.alert(&reason),
            Err(e) => error!(error = %e, "speech recognition error"),
        }
    }

    pub fn session(&self) -> &ConversationSession {
        &self.session
    }

    pub fn surface_mut(&mut self) -> &mut TerminalSurface<W> {
        &mut self.surface
    }
}

/// Forward stdin lines as input events; stops after the first close.
async fn read_input(tx: mpsc::Sender<InputEvent>) {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let event = match lines.next_line().await {
            Ok(Some(line)) => InputEvent::from_line(&line),
            Ok(None) => {
                debug!("stdin closed");
                InputEvent::Close
            }
            Err(e) => {
                warn!(error = %e, "failed to read input");
                InputEvent::Close
            }
        };
        let closing = event == InputEvent::Close;
        if tx.send(event).await.is_err() || closing {
            break;
        }
    }
}
