use super::{ConfigError, PersistenceError};

/// Top-level error for history operations.
#[derive(Debug, thiserror::Error)]
pub enum NextFileError {
    #[error("persistence error: {0}")]
    Persistence(#[from] PersistenceError),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("history lock poisoned: {reason}")]
    LockPoisoned { reason: String },

    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for NextFileError {
    fn from(err: serde_json::Error) -> Self {
        NextFileError::Serialization(err.to_string())
    }
}
