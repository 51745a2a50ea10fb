//! Conversation pipeline for medchat.
//!
//! One turn flows through:
//! - `QueryRouter` picks the search-link responder or the AI backend
//! - `ResponseFormatter` turns the reply into at most N labelled items
//! - `RevealRenderer` types the items into a `Surface` word by word
//!
//! `ConversationSession` owns the cross-turn state and drives the flow.

pub mod formatter;
pub mod reveal;
pub mod router;
pub mod session;
pub mod surface;

pub use formatter::{ResponseFormatter, ResponseItem, DEFAULT_MAX_ITEMS};
pub use reveal::{schedule, RevealPacing, RevealRenderer, RevealStep, Word};
pub use router::{QueryRouter, Responder, SearchLinkResponder};
pub use session::{ConversationSession, SessionState, Turn};
pub use surface::{EntryId, Surface, Transcript, TranscriptEntry};
