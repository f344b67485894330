use nextfile_core::{FileCode, FileHistoryFeatures, ProbabilityFeatures};

#[test]
fn file_code_serializes_as_bare_number() {
    let json = serde_json::to_string(&FileCode(42)).unwrap();
    assert_eq!(json, "42");
    let back: FileCode = serde_json::from_str("7").unwrap();
    assert_eq!(back, FileCode(7));
}

#[test]
fn file_code_next_saturates() {
    assert_eq!(FileCode(3).next(), FileCode(4));
    assert_eq!(FileCode(u32::MAX).next(), FileCode(u32::MAX));
    assert_eq!(FileCode::from(9).value(), 9);
    assert_eq!(FileCode(12).to_string(), "12");
}

#[test]
fn probability_features_ratios() {
    let features = ProbabilityFeatures::from_bounds(0.5, 0.25, 1.0);
    assert_eq!(features.mle_to_min, 2.0);
    assert_eq!(features.mle_to_max, 0.5);
    assert_eq!(features.as_array(), [0.5, 0.25, 1.0, 2.0, 0.5]);
}

#[test]
fn probability_features_zero_divisor_gives_zero_ratio() {
    let features = ProbabilityFeatures::from_bounds(0.0, 0.0, 0.0);
    assert!(features.is_neutral());
    assert!(features.as_array().iter().all(|v| v.is_finite()));
}

#[test]
fn default_history_features_are_neutral() {
    let features = FileHistoryFeatures::default();
    assert_eq!(features.position, None);
    assert!(features.uni_gram.is_neutral());
    assert!(features.bi_gram.is_neutral());
}

mod properties {
    use nextfile_core::ProbabilityFeatures;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn from_bounds_is_always_finite(
            mle in 0.0f64..=1.0,
            min in prop_oneof![Just(0.0), 0.001f64..=1.0],
            max in prop_oneof![Just(0.0), 0.001f64..=1.0],
        ) {
            let features = ProbabilityFeatures::from_bounds(mle, min, max);
            prop_assert!(features.as_array().iter().all(|v| v.is_finite() && *v >= 0.0));
        }
    }
}
