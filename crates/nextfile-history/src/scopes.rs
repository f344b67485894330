//! HistoryScopes: one independent [`HistoryManager`] per tracked scope, via DashMap.

use std::path::Path;
use std::sync::Arc;

use dashmap::DashMap;
use nextfile_core::config::NextFileConfig;
use nextfile_core::errors::NextFileResult;
use nextfile_core::traits::IHistoryStore;
use tracing::{info, warn};

use crate::manager::HistoryManager;
use crate::persistence::JsonFileStore;

/// Thread-safe registry of per-scope histories.
pub struct HistoryScopes {
    config: NextFileConfig,
    scopes: Arc<DashMap<String, Arc<HistoryManager>>>,
}

impl HistoryScopes {
    /// Empty registry; every scope opened through it uses `config`.
    pub fn new(config: NextFileConfig) -> Self {
        Self {
            config,
            scopes: Arc::new(DashMap::new()),
        }
    }

    /// Configuration shared by all scopes.
    pub fn config(&self) -> &NextFileConfig {
        &self.config
    }

    /// History of `scope`, loading it through `store_factory()` on first use.
    ///
    /// The load runs without holding the map. If two callers race to open the
    /// same scope, the first insert wins and the other load is discarded.
    pub fn get_or_open<F>(&self, scope: &str, store_factory: F) -> Arc<HistoryManager>
    where
        F: FnOnce() -> Arc<dyn IHistoryStore>,
    {
        if let Some(existing) = self.get(scope) {
            return existing;
        }
        info!(scope, "opening file history scope");
        let loaded = Arc::new(HistoryManager::open(&self.config, store_factory()));
        let entry = self.scopes.entry(scope.to_string()).or_insert(loaded);
        Arc::clone(entry.value())
    }

    /// History of `scope`, persisted as the configured state file inside `dir`.
    pub fn get_or_open_in(&self, scope: &str, dir: impl AsRef<Path>) -> Arc<HistoryManager> {
        let store: Arc<dyn IHistoryStore> =
            Arc::new(JsonFileStore::for_scope(dir, &self.config.history));
        self.get_or_open(scope, move || store)
    }

    /// History of `scope` if it is open.
    pub fn get(&self, scope: &str) -> Option<Arc<HistoryManager>> {
        self.scopes.get(scope).map(|r| Arc::clone(r.value()))
    }

    /// Save and release `scope`. Returns the released history, if it was open.
    ///
    /// When the final save fails the scope stays open, so the close can be
    /// retried without losing the history.
    pub fn close(&self, scope: &str) -> NextFileResult<Option<Arc<HistoryManager>>> {
        let Some(manager) = self.get(scope) else {
            return Ok(None);
        };
        manager.save()?;
        self.scopes
            .remove_if(scope, |_, open| Arc::ptr_eq(open, &manager));
        info!(scope, "closed file history scope");
        Ok(Some(manager))
    }

    /// Save every open scope. Returns how many saves succeeded.
    pub fn save_all(&self) -> usize {
        let managers: Vec<(String, Arc<HistoryManager>)> = self
            .scopes
            .iter()
            .map(|r| (r.key().clone(), Arc::clone(r.value())))
            .collect();

        let mut saved = 0;
        for (scope, manager) in managers {
            match manager.save() {
                Ok(()) => saved += 1,
                Err(e) => warn!(scope = %scope, error = %e, "failed to save file history scope"),
            }
        }
        saved
    }

    /// Number of open scopes.
    pub fn scope_count(&self) -> usize {
        self.scopes.len()
    }

    /// Names of all open scopes.
    pub fn scope_names(&self) -> Vec<String> {
        self.scopes.iter().map(|r| r.key().clone()).collect()
    }
}
