use std::sync::Mutex;

use nextfile_core::errors::{NextFileError, NextFileResult};
use nextfile_core::traits::IHistoryStore;

/// Keeps the saved document in memory. Useful for embedding and tests.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    document: Mutex<Option<String>>,
}

impl InMemoryStore {
    /// Store holding nothing yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store that already holds `document`.
    pub fn with_document(document: impl Into<String>) -> Self {
        Self {
            document: Mutex::new(Some(document.into())),
        }
    }

    /// Last saved document, if any.
    pub fn document(&self) -> Option<String> {
        self.document
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

impl IHistoryStore for InMemoryStore {
    fn load(&self) -> NextFileResult<Option<String>> {
        let guard = self.document.lock().map_err(|e| NextFileError::LockPoisoned {
            reason: e.to_string(),
        })?;
        Ok(guard.clone())
    }

    fn save(&self, document: &str) -> NextFileResult<()> {
        let mut guard = self.document.lock().map_err(|e| NextFileError::LockPoisoned {
            reason: e.to_string(),
        })?;
        *guard = Some(document.to_string());
        Ok(())
    }
}
