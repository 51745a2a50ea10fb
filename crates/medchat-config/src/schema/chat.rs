//! Conversation pipeline configuration: formatting, reveal pacing, routing.

use medchat_common::{DEFAULT_KEYWORDS, DEFAULT_SEARCH_BASE_URL};
use serde::{Deserialize, Serialize};

/// Response formatting settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatterConfig {
    /// Maximum items kept from one reply (valid range: 1-100).
    pub max_items: usize,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self { max_items: 10 }
    }
}

/// Typing-animation pacing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Delay after each word in ms (valid range: 0-5000).
    pub word_interval_ms: u32,
    /// Delay after each item in ms (valid range: 0-10000).
    pub item_interval_ms: u32,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            word_interval_ms: 30,
            item_interval_ms: 300,
        }
    }
}

/// Search-link routing for care-provider queries.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RouterConfig {
    /// Case-insensitive substrings that send a query to the search link.
    pub keywords: Vec<String>,
    pub search_base_url: String,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            keywords: DEFAULT_KEYWORDS.iter().map(|k| k.to_string()).collect(),
            search_base_url: DEFAULT_SEARCH_BASE_URL.into(),
        }
    }
}

/// Turn handling settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversationConfig {
    /// Phrase that marks a follow-up on the previous topic; matched case-insensitively.
    pub follow_up_marker: String,
    /// Text shown while waiting for a reply.
    pub placeholder: String,
}

impl Default for ConversationConfig {
    fn default() -> Self {
        Self {
            follow_up_marker: "more info".into(),
            placeholder: "...".into(),
        }
    }
}
