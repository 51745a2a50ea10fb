//! Turn handling tests against a recording backend and an in-memory transcript.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use medchat_ai::{BackendError, CompletionBackend};

use super::*;
use crate::reveal::{RevealPacing, RevealRenderer};
use crate::router::{QueryRouter, DEFAULT_KEYWORDS, DEFAULT_SEARCH_BASE_URL};
use crate::surface::{Transcript, TranscriptEntry};
use crate::ResponseFormatter;

/// Records prompts and answers with a canned reply or an error.
struct FakeBackend {
    prompts: Mutex<Vec<String>>,
    reply: Result<String, ()>,
}

impl FakeBackend {
    fn replying(reply: &str) -> Arc<Self> {
        Arc::new(Self {
            prompts: Mutex::new(Vec::new()),
            reply: Ok(reply.to_string()),
        })
    }

    fn failing() -> Arc<Self> {
        Arc::new(Self {
            prompts: Mutex::new(Vec::new()),
            reply: Err(()),
        })
    }

    fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionBackend for FakeBackend {
    async fn complete(&self, prompt: &str) -> Result<String, BackendError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.reply
            .clone()
            .map_err(|_| BackendError::NetworkError("connection refused".into()))
    }
}

fn session(backend: Arc<FakeBackend>) -> ConversationSession {
    let router = QueryRouter::new(DEFAULT_KEYWORDS, DEFAULT_SEARCH_BASE_URL).unwrap();
    ConversationSession::new(backend, router)
        .with_renderer(RevealRenderer::new(RevealPacing::instant()))
}

fn reply_slots(transcript: &Transcript, index: usize) -> Vec<String> {
    match &transcript.entries()[index] {
        TranscriptEntry::Reply { slots, .. } => slots.clone(),
        other => panic!("expected reply, got {other:?}"),
    }
}

#[tokio::test]
async fn backend_reply_is_formatted_and_revealed() {
    let backend = FakeBackend::replying("Symptom: persistent cough\n\nDrink water\n");
    let mut session = session(backend.clone());
    let mut transcript = Transcript::new();

    let turn = session
        .run_turn(&mut transcript, "  Explain how colds spread  ")
        .await
        .unwrap();

    assert!(turn.rendered);
    assert_eq!(turn.user_text, "Explain how colds spread");
    assert_eq!(backend.prompts(), ["Explain how colds spread"]);
    assert_eq!(
        transcript.entries()[0],
        TranscriptEntry::User("Explain how colds spread".into())
    );
    assert_eq!(
        reply_slots(&transcript, 1),
        ["**Symptom:** persistent cough ", "Drink water "]
    );
    assert_eq!(session.turns_completed(), 1);
}

#[tokio::test]
async fn empty_submission_is_ignored() {
    let backend = FakeBackend::replying("unused");
    let mut session = session(backend.clone());
    let mut transcript = Transcript::new();

    assert!(session.run_turn(&mut transcript, "   \t ").await.is_none());

    assert!(transcript.entries().is_empty());
    assert_eq!(transcript.scrolls(), 0);
    assert!(backend.prompts().is_empty());
    assert_eq!(session.turns_completed(), 0);
}

#[tokio::test]
async fn provider_query_uses_search_link_without_backend() {
    let backend = FakeBackend::replying("unused");
    let mut session = session(backend.clone());
    let mut transcript = Transcript::new();

    session
        .run_turn(&mut transcript, "Who is a good cardiologist near me")
        .await
        .unwrap();

    assert!(backend.prompts().is_empty());
    let slots = reply_slots(&transcript, 1);
    assert_eq!(slots.len(), 1);
    assert!(slots[0].starts_with("**Here** **are** **some** **top** **doctors**"));
    assert!(slots[0]
        .contains("https://www.google.com/search?q=Who%20is%20a%20good%20cardiologist%20near%20me"));
}

#[tokio::test]
async fn provider_query_leaves_last_topic_alone() {
    let backend = FakeBackend::replying("ok");
    let mut session = session(backend).with_state(SessionState::with_last_topic("asthma"));
    let mut transcript = Transcript::new();

    session.run_turn(&mut transcript, "find a clinic").await;

    assert_eq!(session.state().last_topic, "asthma");
}

#[tokio::test]
async fn follow_up_is_rewritten_with_last_topic() {
    let backend = FakeBackend::replying("More: details");
    let mut session = session(backend.clone()).with_state(SessionState::with_last_topic("diabetes"));
    let mut transcript = Transcript::new();

    session
        .run_turn(&mut transcript, "tell me more info please")
        .await;

    assert_eq!(backend.prompts(), ["Give me more details about diabetes"]);
    assert_eq!(session.state().last_topic, "diabetes");
}

#[tokio::test]
async fn topic_is_tracked_across_turns() {
    let backend = FakeBackend::replying("ok");
    let mut session = session(backend.clone());
    let mut transcript = Transcript::new();

    session.run_turn(&mut transcript, "What is migraine").await;
    session.run_turn(&mut transcript, "More Info").await;

    assert_eq!(
        backend.prompts(),
        ["What is migraine", "Give me more details about What is migraine"]
    );
}

#[tokio::test]
async fn follow_up_without_topic_becomes_topic() {
    let backend = FakeBackend::replying("ok");
    let mut session = session(backend.clone());
    let mut transcript = Transcript::new();

    session.run_turn(&mut transcript, "more info").await;

    assert_eq!(backend.prompts(), ["more info"]);
    assert_eq!(session.state().last_topic, "more info");
}

#[tokio::test]
async fn backend_failure_renders_fallback_and_keeps_topic() {
    let backend = FakeBackend::failing();
    let mut session = session(backend).with_fallback_message("Service unavailable.");
    let mut transcript = Transcript::new();

    let turn = session
        .run_turn(&mut transcript, "Explain how vaccines work")
        .await
        .unwrap();

    assert!(turn.rendered);
    assert_eq!(reply_slots(&transcript, 1), ["Service unavailable. "]);
    assert_eq!(session.state().last_topic, "Explain how vaccines work");
}

#[tokio::test]
async fn reply_is_capped_by_formatter() {
    let raw: String = (0..20).map(|i| format!("Point {i}\n")).collect();
    let backend = FakeBackend::replying(&raw);
    let mut session = session(backend).with_formatter(ResponseFormatter::new(3));
    let mut transcript = Transcript::new();

    session.run_turn(&mut transcript, "list tips").await;

    assert_eq!(
        reply_slots(&transcript, 1),
        ["Point 0 ", "Point 1 ", "Point 2 "]
    );
}

#[tokio::test]
async fn scrolls_after_each_major_step() {
    let backend = FakeBackend::replying("one");
    let mut session = session(backend);
    let mut transcript = Transcript::new();

    session.run_turn(&mut transcript, "hi").await;

    // user message, placeholder, slot, word, final
    assert_eq!(transcript.scrolls(), 5);
}

#[test]
fn rewrite_prompt_is_case_insensitive() {
    let mut state = SessionState::with_last_topic("diabetes");
    let prompt = state.rewrite_prompt("Tell me MORE INFO please", DEFAULT_FOLLOW_UP_MARKER);
    assert_eq!(prompt, "Give me more details about diabetes");
}

#[test]
fn rewrite_prompt_overwrites_topic_otherwise() {
    let mut state = SessionState::with_last_topic("diabetes");
    let prompt = state.rewrite_prompt("What causes anemia", DEFAULT_FOLLOW_UP_MARKER);
    assert_eq!(prompt, "What causes anemia");
    assert_eq!(state.last_topic, "What causes anemia");
}

#[test]
fn configured_marker_case_does_not_matter() {
    let mut state = SessionState::with_last_topic("asthma");
    let prompt = state.rewrite_prompt("more info on that", "More Info");
    assert_eq!(prompt, "Give me more details about asthma");
    assert_eq!(state.last_topic, "asthma");
}
