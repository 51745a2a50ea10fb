//! ConversationSession struct and construction.

use std::sync::Arc;

use medchat_ai::CompletionBackend;

use crate::formatter::ResponseFormatter;
use crate::reveal::RevealRenderer;
use crate::router::QueryRouter;

use super::types::{SessionState, DEFAULT_FOLLOW_UP_MARKER};

/// Default reply shown when the backend call fails.
pub const DEFAULT_FALLBACK_MESSAGE: &str = "Sorry, I couldn't reach the AI service right now.";

/// Orchestrates turns: routing, backend call, formatting, reveal.
pub struct ConversationSession {
    pub(super) backend: Arc<dyn CompletionBackend>,
    pub(super) router: QueryRouter,
    pub(super) formatter: ResponseFormatter,
    pub(super) renderer: RevealRenderer,
    pub(super) state: SessionState,
    pub(super) follow_up_marker: String,
    pub(super) placeholder: String,
    pub(super) fallback_message: String,
    pub(super) turns_completed: u64,
}

impl ConversationSession {
    pub fn new(backend: Arc<dyn CompletionBackend>, router: QueryRouter) -> Self {
        Self {
            backend,
            router,
            formatter: ResponseFormatter::default(),
            renderer: RevealRenderer::default(),
            state: SessionState::default(),
            follow_up_marker: DEFAULT_FOLLOW_UP_MARKER.to_string(),
            placeholder: "...".to_string(),
            fallback_message: DEFAULT_FALLBACK_MESSAGE.to_string(),
            turns_completed: 0,
        }
    }

    pub fn with_formatter(mut self, formatter: ResponseFormatter) -> Self {
        self.formatter = formatter;
        self
    }

    pub fn with_renderer(mut self, renderer: RevealRenderer) -> Self {
        self.renderer = renderer;
        self
    }

    pub fn with_state(mut self, state: SessionState) -> Self {
        self.state = state;
        self
    }

    pub fn with_follow_up_marker(mut self, marker: impl Into<String>) -> Self {
        self.follow_up_marker = marker.into();
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn with_fallback_message(mut self, message: impl Into<String>) -> Self {
        self.fallback_message = message.into();
        self
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn turns_completed(&self) -> u64 {
        self.turns_completed
    }
}
