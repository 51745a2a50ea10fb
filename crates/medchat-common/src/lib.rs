pub mod errors;
pub mod id;
pub mod keywords;

pub use errors::{ConfigError, MedchatError};
pub use id::{new_correlation_id, TurnId};
pub use keywords::{DEFAULT_KEYWORDS, DEFAULT_SEARCH_BASE_URL};
