//! Full configuration validation.
//!
//! Validates numeric ranges, URL schemes, and required strings. Each
//! domain has its own function; this orchestrator calls them all and
//! collects errors into a single `ConfigError`.

mod helpers;


use crate::schema::MedchatConfig;
use helpers::{validate_http_url, validate_non_empty, validate_range, validate_range_f64};
use medchat_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &MedchatConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_backend(&mut errors, config);
    validate_pipeline(&mut errors, config);
    validate_router(&mut errors, config);
    validate_conversation(&mut errors, config);
    validate_speech(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_backend(errors: &mut Vec<String>, config: &MedchatConfig) {
    let b = &config.backend;
    validate_http_url(errors, "backend.api_base", &b.api_base);
    validate_non_empty(errors, "backend.model", &b.model);
    validate_range_f64(errors, "backend.temperature", b.temperature, 0.0, 2.0);
    validate_range(errors, "backend.max_output_tokens", b.max_output_tokens, 1, 8192);
    validate_range(errors, "backend.top_k", b.top_k, 1, 100);
    validate_range(errors, "backend.connect_timeout_secs", b.connect_timeout_secs, 1, 300);
    validate_range(errors, "backend.timeout_secs", b.timeout_secs, 1, 600);
    if b.api_key.is_none() {
        validate_non_empty(errors, "backend.api_key_env", &b.api_key_env);
    }
}

fn validate_pipeline(errors: &mut Vec<String>, config: &MedchatConfig) {
    let max_items = u32::try_from(config.formatter.max_items).unwrap_or(u32::MAX);
    validate_range(errors, "formatter.max_items", max_items, 1, 100);
    validate_range(errors, "reveal.word_interval_ms", config.reveal.word_interval_ms, 0, 5000);
    validate_range(errors, "reveal.item_interval_ms", config.reveal.item_interval_ms, 0, 10_000);
}

fn validate_router(errors: &mut Vec<String>, config: &MedchatConfig) {
    let r = &config.router;
    if r.keywords.is_empty() {
        errors.push("router.keywords must not be empty".into());
    }
    if r.keywords.iter().any(|k| k.trim().is_empty()) {
        errors.push("router.keywords must not contain blank entries".into());
    }
    validate_http_url(errors, "router.search_base_url", &r.search_base_url);
}

fn validate_conversation(errors: &mut Vec<String>, config: &MedchatConfig) {
    validate_non_empty(
        errors,
        "conversation.follow_up_marker",
        &config.conversation.follow_up_marker,
    );
}

fn validate_speech(errors: &mut Vec<String>, config: &MedchatConfig) {
    if config.speech.enabled {
        validate_non_empty(errors, "speech.api_key_env", &config.speech.api_key_env);
        validate_non_empty(errors, "speech.model", &config.speech.model);
    }
}
