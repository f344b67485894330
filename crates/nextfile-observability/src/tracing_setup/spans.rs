//! Span definitions per operation: file open, feature query, persistence.

/// Create a span around recording a file open.
#[macro_export]
macro_rules! file_opened_span {
    ($identity:expr) => {
        tracing::debug_span!("nextfile.file_opened", identity = %$identity)
    };
}

/// Create a span around a feature query.
#[macro_export]
macro_rules! features_span {
    ($candidates:expr) => {
        tracing::debug_span!("nextfile.features", candidates = $candidates)
    };
}

/// Create a persistence span.
#[macro_export]
macro_rules! persistence_span {
    ($operation:expr) => {
        tracing::info_span!("nextfile.persistence", operation = %$operation)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const FILE_OPENED: &str = "nextfile.file_opened";
    pub const FEATURES: &str = "nextfile.features";
    pub const PERSISTENCE: &str = "nextfile.persistence";
}
