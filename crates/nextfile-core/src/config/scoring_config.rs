use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;

/// Weights of the built-in n-gram candidate scorer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub uni_gram_weight: f64,
    pub bi_gram_weight: f64,
}

impl ScoringConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("uni_gram_weight", self.uni_gram_weight),
            ("bi_gram_weight", self.bi_gram_weight),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidWeight {
                    name: name.to_string(),
                    value,
                });
            }
        }
        Ok(())
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            uni_gram_weight: defaults::DEFAULT_UNI_GRAM_WEIGHT,
            bi_gram_weight: defaults::DEFAULT_BI_GRAM_WEIGHT,
        }
    }
}
