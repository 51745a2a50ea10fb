//! Conversation session.
//!
//! A `ConversationSession` holds the last-topic state and runs one
//! request/response turn end-to-end against a `Surface`.

mod chat;
mod manager;
mod types;

#[cfg(test)]
mod tests;

pub use manager::ConversationSession;
pub use types::{SessionState, Turn, DEFAULT_FOLLOW_UP_MARKER};
