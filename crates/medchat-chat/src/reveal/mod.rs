//! Progressive word-by-word reveal of formatted replies.
//!
//! `schedule` turns items into a flat list of steps (open a slot, append a
//! word, wait). `RevealRenderer` plays those steps against a `Surface`.

mod renderer;
mod schedule;

pub use renderer::RevealRenderer;
pub use schedule::{schedule, total_delay, words_for, RevealPacing, RevealStep, Word};
