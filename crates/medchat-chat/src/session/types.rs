//! Session state and turn records.

use medchat_common::TurnId;

/// Phrase that marks a message as a follow-up on the previous topic.
pub const DEFAULT_FOLLOW_UP_MARKER: &str = "more info";

/// Cross-turn state: the last non-follow-up message sent to the backend.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    pub last_topic: String,
}

impl SessionState {
    pub fn with_last_topic(topic: impl Into<String>) -> Self {
        Self {
            last_topic: topic.into(),
        }
    }

    /// Prompt to send for `user_text`.
    ///
    /// A follow-up (lowercased text contains `marker`) with a known topic
    /// asks for more details on that topic and leaves the topic alone.
    /// Anything else becomes the new topic and is sent unchanged.
    pub fn rewrite_prompt(&mut self, user_text: &str, marker: &str) -> String {
        let is_follow_up = user_text.to_lowercase().contains(&marker.to_lowercase());
        if is_follow_up && !self.last_topic.is_empty() {
            format!("Give me more details about {}", self.last_topic)
        } else {
            self.last_topic = user_text.to_string();
            user_text.to_string()
        }
    }
}

/// One user submission through completed rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub id: TurnId,
    pub user_text: String,
    pub rendered: bool,
}

impl Turn {
    pub(crate) fn new(user_text: impl Into<String>) -> Self {
        Self {
            id: TurnId::new(),
            user_text: user_text.into(),
            rendered: false,
        }
    }
}
