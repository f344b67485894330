//! File-backed store. Writes go to a temporary file in the target directory
//! and are renamed over the previous document, so a reader only ever sees a
//! complete document.

use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use nextfile_core::config::HistoryConfig;
use nextfile_core::errors::{NextFileError, NextFileResult, PersistenceError};
use nextfile_core::traits::IHistoryStore;
use tempfile::NamedTempFile;

/// Stores one scope's history as a JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Store at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store named `file_name` inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>, file_name: &str) -> Self {
        Self::new(dir.as_ref().join(file_name))
    }

    /// Store for the scope kept in `dir`, named by `history.state_file`.
    pub fn for_scope(dir: impl AsRef<Path>, history: &HistoryConfig) -> Self {
        Self::in_dir(dir, &history.state_file)
    }

    /// Path of the stored document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, err: std::io::Error) -> NextFileError {
        PersistenceError::Io {
            path: self.path.display().to_string(),
            reason: err.to_string(),
        }
        .into()
    }
}

impl IHistoryStore for JsonFileStore {
    fn load(&self) -> NextFileResult<Option<String>> {
        match std::fs::read_to_string(&self.path) {
            Ok(document) => Ok(Some(document)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(self.io_error(e)),
        }
    }

    fn save(&self, document: &str) -> NextFileResult<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(dir).map_err(|e| self.io_error(e))?;

        let mut file = NamedTempFile::new_in(dir).map_err(|e| self.io_error(e))?;
        file.write_all(document.as_bytes())
            .map_err(|e| self.io_error(e))?;
        file.as_file().sync_all().map_err(|e| self.io_error(e))?;
        file.persist(&self.path).map_err(|e| self.io_error(e.error))?;
        Ok(())
    }
}
