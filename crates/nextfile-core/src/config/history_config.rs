use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;

/// History tracking configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// Maximum number of recently opened files kept per scope.
    /// Opening a new file beyond this evicts the least recently used one.
    pub recent_files_limit: usize,
    /// File name of the persisted state, relative to the scope directory.
    pub state_file: String,
}

impl HistoryConfig {
    /// Config with a custom limit and the default state file.
    pub fn with_limit(recent_files_limit: usize) -> Self {
        Self {
            recent_files_limit,
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.recent_files_limit == 0 {
            return Err(ConfigError::InvalidLimit {
                limit: self.recent_files_limit,
            });
        }
        Ok(())
    }
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            recent_files_limit: defaults::DEFAULT_RECENT_FILES_LIMIT,
            state_file: defaults::DEFAULT_STATE_FILE.to_string(),
        }
    }
}
