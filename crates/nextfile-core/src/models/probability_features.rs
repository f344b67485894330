use serde::{Deserialize, Serialize};

/// Maximum-likelihood features of one event under one context node.
///
/// `min_mle` / `max_mle` are the estimates of the least and most frequent
/// sibling under the same context; the two ratios relate `mle` to them and
/// are `0.0` when the divisor is zero. The default value is the neutral
/// all-zero vector returned for unknown files and missing contexts.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ProbabilityFeatures {
    pub mle: f64,
    pub min_mle: f64,
    pub max_mle: f64,
    pub mle_to_min: f64,
    pub mle_to_max: f64,
}

impl ProbabilityFeatures {
    /// Build the feature vector from an estimate and its sibling bounds.
    pub fn from_bounds(mle: f64, min_mle: f64, max_mle: f64) -> Self {
        Self {
            mle,
            min_mle,
            max_mle,
            mle_to_min: ratio(mle, min_mle),
            mle_to_max: ratio(mle, max_mle),
        }
    }

    /// Whether every component is zero.
    pub fn is_neutral(&self) -> bool {
        *self == Self::default()
    }

    /// All five components in declaration order.
    pub fn as_array(&self) -> [f64; 5] {
        [
            self.mle,
            self.min_mle,
            self.max_mle,
            self.mle_to_min,
            self.mle_to_max,
        ]
    }
}

fn ratio(value: f64, divisor: f64) -> f64 {
    if divisor != 0.0 {
        value / divisor
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_bounds_give_zero_ratios() {
        let features = ProbabilityFeatures::from_bounds(0.5, 0.0, 0.0);
        assert_eq!(features.mle_to_min, 0.0);
        assert_eq!(features.mle_to_max, 0.0);
        assert!(!features.is_neutral());
    }

    #[test]
    fn ratios_relate_to_bounds() {
        let features = ProbabilityFeatures::from_bounds(0.25, 0.125, 0.5);
        assert_eq!(features.mle_to_min, 2.0);
        assert_eq!(features.mle_to_max, 0.5);
    }
}
