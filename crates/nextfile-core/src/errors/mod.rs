//! Error types for every subsystem, unified under [`NextFileError`].

pub mod config_error;
pub mod nextfile_error;
pub mod persistence_error;

pub use config_error::ConfigError;
pub use nextfile_error::NextFileError;
pub use persistence_error::PersistenceError;

/// Convenience alias used throughout the workspace.
pub type NextFileResult<T> = Result<T, NextFileError>;
