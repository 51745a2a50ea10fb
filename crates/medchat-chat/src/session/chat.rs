//! Running one turn.

use tracing::{debug, info, warn};

use crate::router::Responder;
use crate::surface::Surface;

use super::manager::ConversationSession;
use super::types::Turn;

impl ConversationSession {
    /// Run one turn for `user_text` against `surface`.
    ///
    /// Blank input is ignored and returns `None`. Otherwise the user
    /// message and a placeholder are shown, the routed responder produces
    /// text, and the formatted reply is revealed into the placeholder.
    /// Backend failures are shown as the fallback message.
    pub async fn run_turn<S: Surface + ?Sized>(
        &mut self,
        surface: &mut S,
        user_text: &str,
    ) -> Option<Turn> {
        let text = user_text.trim();
        if text.is_empty() {
            debug!("ignoring empty submission");
            return None;
        }

        let mut turn = Turn::new(text);
        info!(turn = %turn.id, "turn started");

        surface.append_user_message(text);
        surface.scroll_to_bottom();

        let entry = surface.append_placeholder(&self.placeholder);
        surface.scroll_to_bottom();

        let raw = self.respond(&turn, text).await;

        let items = self.formatter.format(&raw);
        debug!(turn = %turn.id, items = items.len(), "reply formatted");

        self.renderer.reveal(surface, entry, &items).await;
        surface.scroll_to_bottom();

        turn.rendered = true;
        self.turns_completed += 1;
        info!(turn = %turn.id, "turn rendered");
        Some(turn)
    }

    /// Raw reply text from the routed responder.
    async fn respond(&mut self, turn: &Turn, text: &str) -> String {
        match self.router.route(text) {
            Responder::SearchLink(link) => {
                info!(turn = %turn.id, url = %link.url(), "routed to search link");
                link.reply()
            }
            Responder::Backend => {
                let prompt = self.state.rewrite_prompt(text, &self.follow_up_marker);
                if prompt != text {
                    debug!(turn = %turn.id, %prompt, "follow-up rewritten");
                }
                match self.backend.complete(&prompt).await {
                    Ok(reply) => reply,
                    Err(e) => {
                        warn!(turn = %turn.id, error = %e, "backend call failed");
                        self.fallback_message.clone()
                    }
                }
            }
        }
    }
}
