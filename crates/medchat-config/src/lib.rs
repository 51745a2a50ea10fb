//! medchat configuration system.
//!
//! TOML-based configuration with full validation. All config sections use
//! sensible defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use medchat_config::load_config;
//!
//! let config = load_config(None).expect("failed to load config");
//! println!("model: {}", config.backend.model);
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{MedchatConfig, CONFIG_SCHEMA_VERSION};

use medchat_common::ConfigError;
use std::path::Path;

/// Load config from `path`, or from the platform default path when `None`.
///
/// The default path is created from the commented template if missing.
/// The returned config has been validated.
pub fn load_config(path: Option<&Path>) -> Result<MedchatConfig, ConfigError> {
    let config = match path {
        Some(path) => toml_loader::load_from_path(path)?,
        None => toml_loader::load_default()?,
    };

    validation::validate(&config)?;
    Ok(config)
}
