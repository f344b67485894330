//! # nextfile-core
//!
//! Foundation crate for next-file prediction.
//! Defines the shared types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::NextFileConfig;
pub use errors::{NextFileError, NextFileResult};
pub use models::{FileCode, FileHistoryFeatures, ProbabilityFeatures};
