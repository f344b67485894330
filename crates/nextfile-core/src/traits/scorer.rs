use crate::models::FileHistoryFeatures;

/// Scalar scoring of a candidate from its history features.
pub trait ICandidateScorer: Send + Sync {
    fn score(&self, features: &FileHistoryFeatures) -> f64;
}
