/// Configuration loading and validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("recent_files_limit must be positive, got {limit}")]
    InvalidLimit { limit: usize },

    #[error("scoring weight {name} must be finite and non-negative, got {value}")]
    InvalidWeight { name: String, value: f64 },

    #[error("failed to parse config: {reason}")]
    Parse { reason: String },
}
