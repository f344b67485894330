use nextfile_core::FileCode;

use crate::ngram::NGramMapNode;
use crate::registry::RecentFileEntry;

/// Complete state of one scope's history, as persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersistentState {
    /// Least recently used first.
    pub recent_files: Vec<RecentFileEntry>,
    pub prev_file: Option<FileCode>,
    pub next_file_code: FileCode,
    pub root: NGramMapNode,
}

impl PersistentState {
    /// Whether nothing was ever recorded.
    pub fn is_empty(&self) -> bool {
        self.recent_files.is_empty() && self.root.count() == 0 && self.root.is_empty()
    }
}
