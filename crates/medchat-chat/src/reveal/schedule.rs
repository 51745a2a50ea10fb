//! Pure reveal pacing: items in, ordered steps out.

use std::time::Duration;

use crate::formatter::ResponseItem;

/// One word of rendered item text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    pub text: String,
    /// Part of the item label.
    pub emphasized: bool,
}

impl Word {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            emphasized: false,
        }
    }

    pub fn emphasized(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            emphasized: true,
        }
    }
}

/// Delays between reveal steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealPacing {
    pub word_interval: Duration,
    pub item_interval: Duration,
}

impl RevealPacing {
    pub fn new(word_interval: Duration, item_interval: Duration) -> Self {
        Self {
            word_interval,
            item_interval,
        }
    }

    pub fn from_millis(word_ms: u64, item_ms: u64) -> Self {
        Self::new(Duration::from_millis(word_ms), Duration::from_millis(item_ms))
    }

    /// No delays at all.
    pub fn instant() -> Self {
        Self::new(Duration::ZERO, Duration::ZERO)
    }
}

impl Default for RevealPacing {
    fn default() -> Self {
        Self::from_millis(30, 300)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RevealStep {
    OpenSlot,
    AppendWord(Word),
    Wait(Duration),
}

/// Words of `"{label}: {body}"` (or `body`), split on single spaces.
///
/// Words that come from the label, colon included, are emphasized.
pub fn words_for(item: &ResponseItem) -> Vec<Word> {
    let mut words = Vec::new();
    if let Some(label) = &item.label {
        let text = format!("{label}:");
        words.extend(text.split(' ').map(Word::emphasized));
    }
    words.extend(item.body.split(' ').map(Word::plain));
    words
}

/// Steps for revealing `items` in order.
///
/// Per item: open a slot, then each word followed by a word wait, then an
/// item wait. Zero items yield zero steps.
pub fn schedule(items: &[ResponseItem], pacing: &RevealPacing) -> Vec<RevealStep> {
    let mut steps = Vec::new();
    for item in items {
        steps.push(RevealStep::OpenSlot);
        for word in words_for(item) {
            steps.push(RevealStep::AppendWord(word));
            steps.push(RevealStep::Wait(pacing.word_interval));
        }
        steps.push(RevealStep::Wait(pacing.item_interval));
    }
    steps
}

/// Sum of all waits in a schedule.
pub fn total_delay(steps: &[RevealStep]) -> Duration {
    steps
        .iter()
        .filter_map(|step| match step {
            RevealStep::Wait(d) => Some(*d),
            _ => None,
        })
        .sum()
}
