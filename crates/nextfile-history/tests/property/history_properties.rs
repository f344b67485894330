use std::collections::HashSet;
use std::sync::Arc;

use nextfile_core::config::{HistoryConfig, NextFileConfig};
use nextfile_core::ProbabilityFeatures;
use nextfile_history::{codec, HistoryManager, InMemoryStore, PersistentState};
use proptest::prelude::*;

fn run(limit: usize, opens: &[u8]) -> HistoryManager {
    let config = NextFileConfig {
        history: HistoryConfig::with_limit(limit),
        ..Default::default()
    };
    let history = HistoryManager::new(&config, Arc::new(InMemoryStore::new()));
    for file in opens {
        history.on_file_opened(&format!("src/file_{file}.rs")).unwrap();
    }
    history
}

fn well_formed(features: &ProbabilityFeatures) -> bool {
    features
        .as_array()
        .iter()
        .all(|value| value.is_finite() && *value >= 0.0)
}

fn arb_opens() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(0u8..12, 0..200)
}

// ── Window bound ──────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn size_never_exceeds_limit(limit in 1usize..8, opens in arb_opens()) {
        let history = run(limit, &opens);
        let distinct = opens.iter().collect::<HashSet<_>>().len();
        prop_assert_eq!(history.size().unwrap(), distinct.min(limit));
    }
}

// ── Code allocation ───────────────────────────────────────────────────────

proptest! {
    #[test]
    fn codes_are_distinct_and_bounded(limit in 1usize..8, opens in arb_opens()) {
        let state = run(limit, &opens).snapshot().unwrap();
        prop_assert!(state.next_file_code.value() as usize <= limit);

        let codes: HashSet<u32> = state.recent_files.iter().map(|e| e.code.value()).collect();
        prop_assert_eq!(codes.len(), state.recent_files.len());
        prop_assert!(codes.iter().all(|code| *code < state.next_file_code.value()));

        let identities: HashSet<&str> =
            state.recent_files.iter().map(|e| e.identity.as_str()).collect();
        prop_assert_eq!(identities.len(), state.recent_files.len());
    }
}

// ── Tree consistency ──────────────────────────────────────────────────────

proptest! {
    #[test]
    fn tree_only_tracks_live_codes(limit in 1usize..8, opens in arb_opens()) {
        let state = run(limit, &opens).snapshot().unwrap();
        let live: HashSet<_> = state.recent_files.iter().map(|e| e.code).collect();

        let children: u64 = state.root.usages().values().map(|node| node.count()).sum();
        prop_assert_eq!(state.root.count(), children);

        for (code, node) in state.root.usages() {
            prop_assert!(live.contains(code), "stale node for code {}", code);
            prop_assert!(node.usages().keys().all(|follower| live.contains(follower)));
            prop_assert!(node.children_total() <= node.count());
        }
    }
}

// ── Feature ranges ────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn features_are_probabilities(
        limit in 1usize..8,
        opens in arb_opens(),
        probe in 0u8..14,
    ) {
        let history = run(limit, &opens);
        let features = history.calc_features(&format!("src/file_{probe}.rs")).unwrap();

        prop_assert!(well_formed(&features.uni_gram));
        prop_assert!(well_formed(&features.bi_gram));
        prop_assert!(features.uni_gram.mle <= 1.0);
        prop_assert!(features.bi_gram.mle <= 1.0);
        prop_assert!(features.uni_gram.mle <= features.uni_gram.max_mle);
        prop_assert!(features.bi_gram.mle <= features.bi_gram.max_mle);

        if features.position.is_none() {
            prop_assert!(features.uni_gram.is_neutral());
            prop_assert!(features.bi_gram.is_neutral());
        }
    }
}

proptest! {
    #[test]
    fn queries_do_not_change_state(limit in 1usize..8, opens in arb_opens(), probe in 0u8..14) {
        let history = run(limit, &opens);
        let before = history.snapshot().unwrap();
        let identity = format!("src/file_{probe}.rs");
        let first = history.calc_features(&identity).unwrap();
        history.calc_ngram_features(&[identity.as_str()]).unwrap();
        let second = history.calc_features(&identity).unwrap();

        prop_assert_eq!(first, second);
        prop_assert_eq!(history.snapshot().unwrap(), before);
    }
}

// ── External form ─────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn encoding_is_stable(limit in 1usize..8, opens in arb_opens()) {
        let state = run(limit, &opens).snapshot().unwrap();
        let encoded = codec::encode(&state).unwrap();
        let decoded: PersistentState = codec::decode(&encoded);

        prop_assert_eq!(&decoded, &state);
        prop_assert_eq!(codec::encode(&decoded).unwrap(), encoded);
    }
}

proptest! {
    #[test]
    fn decode_never_panics(document in ".{0,200}") {
        let _ = codec::decode(&document);
    }
}
