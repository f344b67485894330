use serde::{Deserialize, Serialize};

use super::ProbabilityFeatures;

/// History features of a candidate file.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FileHistoryFeatures {
    /// Distance from the most recently opened file (0 = most recent),
    /// `None` when the file is not in the recent-files window.
    pub position: Option<usize>,
    /// Probability of opening the file regardless of what came before.
    pub uni_gram: ProbabilityFeatures,
    /// Probability of opening the file right after the previous one.
    pub bi_gram: ProbabilityFeatures,
}
