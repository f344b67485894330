//! HistoryManager: one scope's recent-file registry and n-gram statistics
//! behind a single lock.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use nextfile_core::config::NextFileConfig;
use nextfile_core::errors::{NextFileError, NextFileResult, PersistenceError};
use nextfile_core::traits::{ICandidateScorer, IHistoryStore};
use nextfile_core::{FileCode, FileHistoryFeatures};
use nextfile_observability::{features_span, file_opened_span, persistence_span};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::codec;
use crate::estimator;
use crate::ngram::NGramStore;
use crate::registry::RecentFileRegistry;
use crate::scoring::NGramScorer;
use crate::state::PersistentState;

struct HistoryState {
    registry: RecentFileRegistry,
    ngrams: NGramStore,
    prev_file: Option<FileCode>,
    /// Number of snapshots taken for saving; orders them.
    saves_taken: u64,
}

/// A snapshot on its way to the store, tagged with the order it was taken in.
struct PendingSave {
    sequence: u64,
    state: PersistentState,
}

impl HistoryState {
    fn features(&self, identity: &str) -> FileHistoryFeatures {
        let (position, code) = match self.registry.lookup(identity) {
            Some((position, code)) => (Some(position), Some(code)),
            None => (None, None),
        };
        FileHistoryFeatures {
            position,
            uni_gram: estimator::uni_gram_estimate(&self.ngrams, code),
            bi_gram: estimator::bi_gram_estimate(&self.ngrams, code, self.prev_file, true),
        }
    }

    fn snapshot(&self) -> PersistentState {
        PersistentState {
            recent_files: self.registry.entries().cloned().collect(),
            prev_file: self.prev_file,
            next_file_code: self.registry.next_file_code(),
            root: self.ngrams.root().clone(),
        }
    }
}

/// Next-file history of one scope (for example one project).
///
/// Every operation takes the same mutex, so a feature query never observes a
/// half-applied open and a snapshot never observes a half-updated tree.
///
/// Writes to the store are ordered: a save never overwrites the document of a
/// save whose snapshot was taken later.
pub struct HistoryManager {
    state: Mutex<HistoryState>,
    store: Arc<dyn IHistoryStore>,
    scorer: Arc<dyn ICandidateScorer>,
    /// Sequence of the newest snapshot written to the store.
    last_written: Arc<Mutex<u64>>,
}

impl HistoryManager {
    /// Empty history saving to `store`. Nothing is loaded.
    pub fn new(config: &NextFileConfig, store: Arc<dyn IHistoryStore>) -> Self {
        Self::from_state(PersistentState::default(), config, store)
    }

    /// Load the history saved in `store`.
    ///
    /// An unreadable or malformed document is logged and replaced by an
    /// empty history.
    pub fn open(config: &NextFileConfig, store: Arc<dyn IHistoryStore>) -> Self {
        let span = persistence_span!("load");
        let _guard = span.enter();
        let state = match store.load() {
            Ok(Some(document)) => codec::decode(&document),
            Ok(None) => PersistentState::default(),
            Err(e) => {
                warn!(error = %e, "failed to load file history, starting empty");
                PersistentState::default()
            }
        };
        info!(
            recent_files = state.recent_files.len(),
            events = state.root.count(),
            "file history loaded"
        );
        Self::from_state(state, config, store)
    }

    /// Build from an explicit initial state.
    pub fn from_state(
        state: PersistentState,
        config: &NextFileConfig,
        store: Arc<dyn IHistoryStore>,
    ) -> Self {
        let PersistentState {
            recent_files,
            prev_file,
            next_file_code,
            root,
        } = state;

        let mut ngrams = NGramStore::from_root(root);
        let registry = RecentFileRegistry::restore(
            recent_files,
            next_file_code,
            config.history.recent_files_limit,
            |evicted| {
                ngrams.purge(evicted);
            },
        );

        Self {
            state: Mutex::new(HistoryState {
                registry,
                ngrams,
                prev_file,
                saves_taken: 0,
            }),
            store,
            scorer: Arc::new(NGramScorer::new(&config.scoring)),
            last_written: Arc::new(Mutex::new(0)),
        }
    }

    /// Replace the scorer used by [`calc_ngram_features`](Self::calc_ngram_features).
    pub fn with_scorer(mut self, scorer: Arc<dyn ICandidateScorer>) -> Self {
        self.scorer = scorer;
        self
    }

    fn lock(&self) -> NextFileResult<MutexGuard<'_, HistoryState>> {
        self.state.lock().map_err(|e| NextFileError::LockPoisoned {
            reason: e.to_string(),
        })
    }

    /// Record that `identity` was opened.
    pub fn on_file_opened(&self, identity: &str) -> NextFileResult<()> {
        let span = file_opened_span!(identity);
        let _guard = span.enter();
        let mut state = self.lock()?;
        let HistoryState {
            registry,
            ngrams,
            prev_file,
            ..
        } = &mut *state;

        let code = registry.find_or_add(identity, |evicted| {
            ngrams.purge(evicted);
            // A reused code must not inherit the evicted file as its predecessor.
            if *prev_file == Some(evicted) {
                *prev_file = None;
            }
        });
        ngrams.record(code, *prev_file);
        *prev_file = Some(code);
        Ok(())
    }

    /// Features of `identity` as the next file to open. Read-only.
    pub fn calc_features(&self, identity: &str) -> NextFileResult<FileHistoryFeatures> {
        let span = features_span!(1usize);
        let _guard = span.enter();
        let state = self.lock()?;
        Ok(state.features(identity))
    }

    /// Scalar score per candidate, computed with the configured scorer.
    pub fn calc_ngram_features<S: AsRef<str>>(
        &self,
        candidates: &[S],
    ) -> NextFileResult<HashMap<String, f64>> {
        let span = features_span!(candidates.len());
        let _guard = span.enter();
        let state = self.lock()?;
        Ok(candidates
            .iter()
            .map(|candidate| {
                let identity = candidate.as_ref();
                let score = self.scorer.score(&state.features(identity));
                (identity.to_string(), score)
            })
            .collect())
    }

    /// Number of tracked files.
    pub fn size(&self) -> NextFileResult<usize> {
        Ok(self.lock()?.registry.len())
    }

    /// Forget every tracked file and all statistics.
    ///
    /// The code counter and the previous-file pointer are left as they are.
    pub fn cleanup(&self) -> NextFileResult<()> {
        let mut state = self.lock()?;
        state.registry.clear();
        state.ngrams.clear();
        info!("file history cleared");
        Ok(())
    }

    /// Consistent copy of the full state.
    pub fn snapshot(&self) -> NextFileResult<PersistentState> {
        Ok(self.lock()?.snapshot())
    }

    /// Encode a snapshot and write it to the store on the calling thread.
    pub fn save(&self) -> NextFileResult<()> {
        let span = persistence_span!("save");
        let _guard = span.enter();
        let pending = self.take_save()?;
        write_in_order(self.store.as_ref(), &self.last_written, pending)
    }

    fn take_save(&self) -> NextFileResult<PendingSave> {
        let mut state = self.lock()?;
        state.saves_taken += 1;
        Ok(PendingSave {
            sequence: state.saves_taken,
            state: state.snapshot(),
        })
    }

    /// Snapshot now, write on the blocking pool.
    ///
    /// Must be called from within a Tokio runtime. Failures are logged and
    /// returned through the handle; the in-memory history is unaffected and
    /// the next save writes the then-current state.
    pub fn save_in_background(&self) -> JoinHandle<NextFileResult<()>> {
        let pending = self.take_save();
        let store = Arc::clone(&self.store);
        let last_written = Arc::clone(&self.last_written);
        tokio::task::spawn_blocking(move || {
            let span = persistence_span!("background_save");
            let _guard = span.enter();
            let result = pending
                .and_then(|pending| write_in_order(store.as_ref(), &last_written, pending));
            if let Err(e) = &result {
                warn!(error = %e, "background file history save failed");
            }
            result
        })
    }
}

/// Write `pending` unless a later snapshot already reached the store.
fn write_in_order(
    store: &dyn IHistoryStore,
    last_written: &Mutex<u64>,
    pending: PendingSave,
) -> NextFileResult<()> {
    let mut last_written = last_written.lock().map_err(|e| NextFileError::LockPoisoned {
        reason: e.to_string(),
    })?;
    if pending.sequence <= *last_written {
        debug!(
            sequence = pending.sequence,
            last_written = *last_written,
            "skipping file history snapshot superseded by a later save"
        );
        return Ok(());
    }
    write_snapshot(store, &pending.state)?;
    *last_written = pending.sequence;
    Ok(())
}

fn write_snapshot(store: &dyn IHistoryStore, snapshot: &PersistentState) -> NextFileResult<()> {
    let document = codec::encode(snapshot).map_err(|e| PersistenceError::Encode {
        reason: e.to_string(),
    })?;
    store.save(&document)?;
    info!(
        recent_files = snapshot.recent_files.len(),
        bytes = document.len(),
        "file history saved"
    );
    Ok(())
}

/// Await a background save, folding a panicked or cancelled task into the error type.
pub async fn join_save(handle: JoinHandle<NextFileResult<()>>) -> NextFileResult<()> {
    handle.await.map_err(|e| PersistenceError::TaskFailed {
        reason: e.to_string(),
    })?
}
