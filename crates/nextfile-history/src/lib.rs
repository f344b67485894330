//! # nextfile-history
//!
//! Online next-file prediction from the sequence of opened files.
//!
//! | Component | Role |
//! |-----------|------|
//! | [`RecentFileRegistry`] | bounded LRU of identities → compact [`FileCode`](nextfile_core::FileCode)s, codes recycled on eviction |
//! | [`NGramStore`] | uni-gram / bi-gram open counts, purged when a code is evicted |
//! | [`estimator`] | MLE features with sibling min/max normalization |
//! | [`codec`] | lossless, lenient JSON external form |
//! | [`HistoryManager`] | per-scope orchestration behind one lock |
//! | [`HistoryScopes`] | one manager per scope |
//!
//! ## Flow
//!
//! `on_file_opened` → registry assigns or reuses a code (evicting and purging
//! the least recent file if full) → the store records the open, with the
//! previous file as bi-gram context → the previous-file pointer moves.
//! `calc_features` only reads.

pub mod codec;
pub mod estimator;
pub mod manager;
pub mod ngram;
pub mod persistence;
pub mod registry;
pub mod scopes;
pub mod scoring;
pub mod state;

pub use manager::{join_save, HistoryManager};
pub use ngram::{FrequencyNode, NGramListNode, NGramMapNode, NGramStore};
pub use persistence::{InMemoryStore, JsonFileStore};
pub use registry::{RecentFileEntry, RecentFileRegistry};
pub use scopes::HistoryScopes;
pub use scoring::NGramScorer;
pub use state::PersistentState;
