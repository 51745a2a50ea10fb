//! Display surface the conversation writes into.

use crate::reveal::Word;

/// Handle to a reply entry created by `append_placeholder`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntryId(pub usize);

/// A transcript view: user messages, reply entries made of item slots,
/// and alerts.
///
/// Writes are infallible from the caller's side; implementations report
/// their own I/O problems.
pub trait Surface {
    fn append_user_message(&mut self, text: &str);

    /// Add a reply entry showing `placeholder` until it is cleared.
    fn append_placeholder(&mut self, placeholder: &str) -> EntryId;

    /// Remove all content from a reply entry.
    fn clear_entry(&mut self, entry: EntryId);

    /// Start a new, empty item slot at the end of `entry`.
    fn open_slot(&mut self, entry: EntryId);

    /// Append `word` and a trailing space to the last slot of `entry`.
    fn append_word(&mut self, entry: EntryId, word: &Word);

    fn scroll_to_bottom(&mut self);

    /// Show a message the user must notice.
    fn alert(&mut self, message: &str);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranscriptEntry {
    User(String),
    Reply {
        placeholder: Option<String>,
        slots: Vec<String>,
    },
    Alert(String),
}

/// In-memory surface. Emphasis is kept as `**word**` markers.
#[derive(Debug, Default)]
pub struct Transcript {
    entries: Vec<TranscriptEntry>,
    scrolls: usize,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    /// Number of scroll-to-bottom requests so far.
    pub fn scrolls(&self) -> usize {
        self.scrolls
    }

    /// Slots of a reply entry, or `None` if `entry` is not a reply.
    pub fn slots(&self, entry: EntryId) -> Option<&[String]> {
        match self.entries.get(entry.0) {
            Some(TranscriptEntry::Reply { slots, .. }) => Some(slots),
            _ => None,
        }
    }

    fn reply_mut(&mut self, entry: EntryId) -> Option<(&mut Option<String>, &mut Vec<String>)> {
        match self.entries.get_mut(entry.0) {
            Some(TranscriptEntry::Reply { placeholder, slots }) => Some((placeholder, slots)),
            _ => None,
        }
    }
}

impl Surface for Transcript {
    fn append_user_message(&mut self, text: &str) {
        self.entries.push(TranscriptEntry::User(text.to_string()));
    }

    fn append_placeholder(&mut self, placeholder: &str) -> EntryId {
        self.entries.push(TranscriptEntry::Reply {
            placeholder: Some(placeholder.to_string()),
            slots: Vec::new(),
        });
        EntryId(self.entries.len() - 1)
    }

    fn clear_entry(&mut self, entry: EntryId) {
        if let Some((placeholder, slots)) = self.reply_mut(entry) {
            *placeholder = None;
            slots.clear();
        }
    }

    fn open_slot(&mut self, entry: EntryId) {
        if let Some((_, slots)) = self.reply_mut(entry) {
            slots.push(String::new());
        }
    }

    fn append_word(&mut self, entry: EntryId, word: &Word) {
        if let Some(slot) = self.reply_mut(entry).and_then(|(_, slots)| slots.last_mut()) {
            if word.emphasized {
                slot.push_str("**");
                slot.push_str(&word.text);
                slot.push_str("**");
            } else {
                slot.push_str(&word.text);
            }
            slot.push(' ');
        }
    }

    fn scroll_to_bottom(&mut self) {
        self.scrolls += 1;
    }

    fn alert(&mut self, message: &str) {
        self.entries.push(TranscriptEntry::Alert(message.to_string()));
    }
}
