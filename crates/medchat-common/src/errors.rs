use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum MedchatError {
    #[error("backend error: {0}")]
    Backend(String),

    #[error("invalid router keywords: {0}")]
    Router(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("reveal.word_interval_ms out of range".into());
        assert_eq!(
            err.to_string(),
            "config validation error: reveal.word_interval_ms out of range"
        );
    }

    #[test]
    fn medchat_error_display() {
        let err = MedchatError::Backend("client build failed".into());
        assert_eq!(err.to_string(), "backend error: client build failed");

        let err = MedchatError::Router("unclosed group".into());
        assert_eq!(err.to_string(), "invalid router keywords: unclosed group");
    }
}
