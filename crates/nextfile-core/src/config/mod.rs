//! Configuration for history tracking, candidate scoring, and logging.
//!
//! Every section falls back to its defaults, so an empty TOML document is a
//! valid configuration.

pub mod defaults;
pub mod history_config;
pub mod observability_config;
pub mod scoring_config;

pub use history_config::HistoryConfig;
pub use observability_config::ObservabilityConfig;
pub use scoring_config::ScoringConfig;

use serde::{Deserialize, Serialize};

use crate::errors::{ConfigError, NextFileResult};

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NextFileConfig {
    pub history: HistoryConfig,
    pub scoring: ScoringConfig,
    pub observability: ObservabilityConfig,
}

impl NextFileConfig {
    /// Parse a TOML document and validate the result.
    pub fn from_toml(source: &str) -> NextFileResult<Self> {
        let config: Self = toml::from_str(source).map_err(|e| ConfigError::Parse {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize back to TOML.
    pub fn to_toml(&self) -> NextFileResult<String> {
        let text = toml::to_string(self).map_err(|e| ConfigError::Parse {
            reason: e.to_string(),
        })?;
        Ok(text)
    }

    /// Check every section.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.history.validate()?;
        self.scoring.validate()
    }
}
