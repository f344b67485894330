//! Built-in candidate scorer.

use nextfile_core::config::ScoringConfig;
use nextfile_core::traits::ICandidateScorer;
use nextfile_core::FileHistoryFeatures;

/// Weighted sum of the uni-gram and bi-gram MLEs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NGramScorer {
    uni_gram_weight: f64,
    bi_gram_weight: f64,
}

impl NGramScorer {
    /// Scorer with the configured weights.
    pub fn new(config: &ScoringConfig) -> Self {
        Self::with_weights(config.uni_gram_weight, config.bi_gram_weight)
    }

    /// Scorer with explicit weights.
    pub fn with_weights(uni_gram_weight: f64, bi_gram_weight: f64) -> Self {
        Self {
            uni_gram_weight,
            bi_gram_weight,
        }
    }
}

impl Default for NGramScorer {
    fn default() -> Self {
        Self::new(&ScoringConfig::default())
    }
}

impl ICandidateScorer for NGramScorer {
    fn score(&self, features: &FileHistoryFeatures) -> f64 {
        self.uni_gram_weight * features.uni_gram.mle + self.bi_gram_weight * features.bi_gram.mle
    }
}
