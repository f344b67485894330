//! Seams implemented outside the estimator: persistence and candidate scoring.

pub mod history_store;
pub mod scorer;

pub use history_store::IHistoryStore;
pub use scorer::ICandidateScorer;
