use thiserror::Error;

/// Unified error type for release-prune operations
#[derive(Error, Debug)]
pub enum ReleasePruneError {
    #[error("Unknown strategy: {0}")]
    UnknownStrategy(String),

    #[error("Invalid strategy format: {0}")]
    InvalidStrategyFormat(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Remote operation failed: {0}")]
    Remote(String),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in release-prune
pub type Result<T> = std::result::Result<T, ReleasePruneError>;

impl ReleasePruneError {
    /// Create an unknown-strategy error
    pub fn unknown_strategy(token: impl Into<String>) -> Self {
        ReleasePruneError::UnknownStrategy(token.into())
    }

    /// Create an invalid-strategy-format error with context
    pub fn invalid_strategy_format(msg: impl Into<String>) -> Self {
        ReleasePruneError::InvalidStrategyFormat(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ReleasePruneError::Config(msg.into())
    }

    /// Create a remote error with context
    pub fn remote(msg: impl Into<String>) -> Self {
        ReleasePruneError::Remote(msg.into())
    }
}
