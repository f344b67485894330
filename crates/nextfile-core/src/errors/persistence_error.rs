/// Errors raised while loading or saving persisted history.
#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    #[error("I/O failure on {path}: {reason}")]
    Io { path: String, reason: String },

    #[error("failed to encode history state: {reason}")]
    Encode { reason: String },

    #[error("background save task failed: {reason}")]
    TaskFailed { reason: String },
}
