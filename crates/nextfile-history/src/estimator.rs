//! Maximum-likelihood estimates over n-gram nodes.
//!
//! `mle = event count / context count`, where the context is the count of the
//! node the event sits under. The sibling bounds use the same formula with
//! the smallest and largest child counts of that node.
//!
//! `is_incomplete` removes one event from the context. Bi-gram queries run
//! right after the previous file's open was folded into its node count, and
//! that open has no follower yet, so it must not count toward the denominator.

use nextfile_core::{FileCode, ProbabilityFeatures};

use crate::ngram::{Counted, FrequencyNode, NGramStore};

/// Denominator of the estimate.
pub fn context_count<C: Counted>(node: &FrequencyNode<C>, is_incomplete: bool) -> i64 {
    let count = i64::try_from(node.count()).unwrap_or(i64::MAX);
    if is_incomplete {
        count - 1
    } else {
        count
    }
}

/// `event_count / context_count`, or `0.0` when either side is not positive.
pub fn mle<C: Counted>(node: &FrequencyNode<C>, event_count: u64, is_incomplete: bool) -> f64 {
    let context = context_count(node, is_incomplete);
    if context <= 0 || event_count == 0 {
        return 0.0;
    }
    event_count as f64 / context as f64
}

/// Features of `code` under `node`. An absent code counts as zero events.
pub fn estimate<C: Counted>(
    node: &FrequencyNode<C>,
    code: Option<FileCode>,
    is_incomplete: bool,
) -> ProbabilityFeatures {
    let event_count = code.map(|code| node.child_count(code)).unwrap_or(0);
    let (min, max) = node.find_min_max();
    ProbabilityFeatures::from_bounds(
        mle(node, event_count, is_incomplete),
        mle(node, min, is_incomplete),
        mle(node, max, is_incomplete),
    )
}

/// Probability of opening `code` regardless of history.
///
/// Neutral features when `code` is unknown or was purged.
pub fn uni_gram_estimate(store: &NGramStore, code: Option<FileCode>) -> ProbabilityFeatures {
    match code.filter(|code| store.uni_gram_node(*code).is_some()) {
        Some(code) => estimate(store.root(), Some(code), false),
        None => ProbabilityFeatures::default(),
    }
}

/// Probability of opening `code` right after `previous`.
///
/// Neutral features when `code` is unknown or `previous` has no node. A known
/// code that never followed `previous` still gets the sibling bounds.
pub fn bi_gram_estimate(
    store: &NGramStore,
    code: Option<FileCode>,
    previous: Option<FileCode>,
    is_incomplete: bool,
) -> ProbabilityFeatures {
    let Some(code) = code else {
        return ProbabilityFeatures::default();
    };
    match previous.and_then(|previous| store.bi_gram_node(previous)) {
        Some(node) => estimate(node, Some(code), is_incomplete),
        None => ProbabilityFeatures::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: FileCode = FileCode(0);
    const B: FileCode = FileCode(1);
    const C: FileCode = FileCode(2);

    fn store_of(opens: &[FileCode]) -> NGramStore {
        let mut store = NGramStore::new();
        let mut previous = None;
        for code in opens {
            store.record(*code, previous);
            previous = Some(*code);
        }
        store
    }

    #[test]
    fn empty_context_yields_zero_not_nan() {
        let node = FrequencyNode::<u64>::new();
        assert_eq!(mle(&node, 0, false), 0.0);
        assert_eq!(mle(&node, 3, false), 0.0);
        assert_eq!(mle(&node, 3, true), 0.0);
        assert_eq!(context_count(&node, true), -1);
    }

    #[test]
    fn uni_gram_matches_frequencies() {
        let store = store_of(&[A, B, A, C]);
        let features = uni_gram_estimate(&store, Some(A));
        assert_eq!(features.mle, 0.5);
        assert_eq!(features.min_mle, 0.25);
        assert_eq!(features.max_mle, 0.5);
        assert_eq!(features.mle_to_min, 2.0);
        assert_eq!(features.mle_to_max, 1.0);
    }

    #[test]
    fn estimate_of_absent_event_keeps_sibling_bounds() {
        let store = store_of(&[A, B]);
        let features = estimate(store.root(), None, false);
        assert_eq!(features.mle, 0.0);
        assert_eq!(features.max_mle, 0.5);
        assert_eq!(features.mle_to_max, 0.0);
    }

    #[test]
    fn uni_gram_of_unknown_code_is_neutral() {
        let store = store_of(&[A, B]);
        assert!(uni_gram_estimate(&store, None).is_neutral());
        assert!(uni_gram_estimate(&store, Some(C)).is_neutral());
    }

    #[test]
    fn bi_gram_of_known_code_that_never_followed_keeps_bounds() {
        let store = store_of(&[A, B, C, A]);
        let features = bi_gram_estimate(&store, Some(C), Some(A), true);
        assert_eq!(features.mle, 0.0);
        assert_eq!(features.max_mle, 1.0);
    }

    #[test]
    fn bi_gram_excludes_in_flight_open() {
        // A -> B, A -> C, then A again: A counted 3 times, 2 followers.
        let store = store_of(&[A, B, A, C, A]);
        let features = bi_gram_estimate(&store, Some(B), Some(A), true);
        assert_eq!(features.mle, 0.5);
        let complete = bi_gram_estimate(&store, Some(B), Some(A), false);
        assert!((complete.mle - 1.0 / 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn bi_gram_without_previous_is_neutral() {
        let store = store_of(&[A, B]);
        assert!(bi_gram_estimate(&store, Some(B), None, true).is_neutral());
        assert!(bi_gram_estimate(&store, Some(B), Some(FileCode(9)), true).is_neutral());
    }
}
