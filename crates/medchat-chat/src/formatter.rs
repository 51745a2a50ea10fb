//! Raw model text to a bounded list of labelled items.

/// Item cap used when none is configured.
pub const DEFAULT_MAX_ITEMS: usize = 10;

/// One displayable line of a reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseItem {
    /// Text before the first colon, if the line had one.
    pub label: Option<String>,
    pub body: String,
}

impl ResponseItem {
    pub fn plain(body: impl Into<String>) -> Self {
        Self {
            label: None,
            body: body.into(),
        }
    }

    pub fn labelled(label: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            body: body.into(),
        }
    }

    /// Parse one non-blank line.
    fn from_line(line: &str) -> Self {
        match line.split_once(':') {
            Some((label, rest)) => Self::labelled(label.trim(), rest.trim()),
            None => Self::plain(line.trim()),
        }
    }
}

/// Splits replies into items, keeping the first `max_items` non-blank lines.
#[derive(Debug, Clone)]
pub struct ResponseFormatter {
    max_items: usize,
}

impl ResponseFormatter {
    pub fn new(max_items: usize) -> Self {
        Self { max_items }
    }

    /// Never fails; blank input yields no items.
    pub fn format(&self, raw: &str) -> Vec<ResponseItem> {
        raw.split('\n')
            .filter(|line| !line.trim().is_empty())
            .take(self.max_items)
            .map(ResponseItem::from_line)
            .collect()
    }
}

impl Default for ResponseFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ITEMS)
    }
}
