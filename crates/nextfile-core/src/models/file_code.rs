use std::fmt;

use serde::{Deserialize, Serialize};

/// Compact surrogate for a tracked file identity.
///
/// A code stays attached to its identity for as long as the identity remains
/// in the recent-files window. Codes freed by eviction are handed out again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileCode(pub u32);

impl FileCode {
    pub fn value(self) -> u32 {
        self.0
    }

    /// The code issued after this one.
    pub fn next(self) -> Self {
        FileCode(self.0.saturating_add(1))
    }
}

impl From<u32> for FileCode {
    fn from(value: u32) -> Self {
        FileCode(value)
    }
}

impl fmt::Display for FileCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
