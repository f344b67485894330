//! Shared data models.

pub mod file_code;
pub mod file_history_features;
pub mod probability_features;

pub use file_code::FileCode;
pub use file_history_features::FileHistoryFeatures;
pub use probability_features::ProbabilityFeatures;
