//! Plays a reveal schedule against a surface.

use tracing::debug;

use crate::formatter::ResponseItem;
use crate::surface::{EntryId, Surface};

use super::schedule::{schedule, total_delay, RevealPacing, RevealStep};

/// Types formatted items into a reply entry with timed pacing.
#[derive(Debug, Clone, Default)]
pub struct RevealRenderer {
    pacing: RevealPacing,
}

impl RevealRenderer {
    pub fn new(pacing: RevealPacing) -> Self {
        Self { pacing }
    }

    /// Clear `entry` and reveal `items` into it.
    ///
    /// Resolves after the last word of the last item and the final item
    /// wait. Scrolls after every slot and every word.
    pub async fn reveal<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        entry: EntryId,
        items: &[ResponseItem],
    ) {
        surface.clear_entry(entry);

        let steps = schedule(items, &self.pacing);
        debug!(
            items = items.len(),
            steps = steps.len(),
            total_ms = total_delay(&steps).as_millis() as u64,
            "revealing reply"
        );

        for step in steps {
            match step {
                RevealStep::OpenSlot => {
                    surface.open_slot(entry);
                    surface.scroll_to_bottom();
                }
                RevealStep::AppendWord(word) => {
                    surface.append_word(entry, &word);
                    surface.scroll_to_bottom();
                }
                RevealStep::Wait(delay) => {
                    if !delay.is_zero() {
                        tokio::time::sleep(delay).await;
                    }
                }
            }
        }
    }
}
