//! Configuration schema types for medchat.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with the defaults the client ships with.

mod backend;
mod chat;
mod system;

pub use backend::*;
pub use chat::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for medchat.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct MedchatConfig {
    pub backend: BackendConfig,
    pub formatter: FormatterConfig,
    pub reveal: RevealConfig,
    pub router: RouterConfig,
    pub conversation: ConversationConfig,
    pub speech: SpeechConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================
