//! Bounded LRU of recently opened files, mapping each identity to a [`FileCode`].

use std::collections::{HashSet, VecDeque};

use nextfile_core::FileCode;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One tracked file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentFileEntry {
    pub identity: String,
    pub code: FileCode,
}

impl RecentFileEntry {
    /// Entry tying `identity` to `code`.
    pub fn new(identity: impl Into<String>, code: FileCode) -> Self {
        Self {
            identity: identity.into(),
            code,
        }
    }
}

/// Fixed-capacity LRU of file identities.
///
/// Entries are ordered least recently used first. Codes of evicted entries go
/// to a free list and are handed out again before `next_file_code` advances.
#[derive(Debug, Clone)]
pub struct RecentFileRegistry {
    entries: VecDeque<RecentFileEntry>,
    limit: usize,
    next_file_code: FileCode,
    free_codes: Vec<FileCode>,
}

impl RecentFileRegistry {
    /// Empty registry. A zero limit is raised to one.
    pub fn new(limit: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            limit: limit.max(1),
            next_file_code: FileCode::default(),
            free_codes: Vec::new(),
        }
    }

    /// Rebuild from persisted entries (least recent first).
    ///
    /// Duplicate identities or codes keep their most recent occurrence; a code
    /// left without an owner is reported through `on_evict`. Entries
    /// beyond `limit` are evicted from the least recent end, reported through
    /// `on_evict`, and their codes become reusable. `next_file_code` is raised
    /// past every live code.
    pub fn restore(
        entries: Vec<RecentFileEntry>,
        next_file_code: FileCode,
        limit: usize,
        mut on_evict: impl FnMut(FileCode),
    ) -> Self {
        let mut registry = Self::new(limit);

        let mut seen_identities = HashSet::new();
        let mut seen_codes = HashSet::new();
        let mut kept = VecDeque::with_capacity(entries.len());
        let mut dropped = Vec::new();
        for entry in entries.into_iter().rev() {
            if seen_identities.contains(&entry.identity) || seen_codes.contains(&entry.code) {
                debug!(identity = %entry.identity, code = %entry.code, "dropping duplicate recent file");
                dropped.push(entry.code);
                continue;
            }
            seen_identities.insert(entry.identity.clone());
            seen_codes.insert(entry.code);
            kept.push_front(entry);
        }
        registry.entries = kept;

        // Statistics of a dropped code that no kept entry owns are orphaned.
        for code in dropped {
            if seen_codes.insert(code) {
                on_evict(code);
            }
        }

        registry.next_file_code = registry
            .entries
            .iter()
            .map(|entry| entry.code.next())
            .fold(next_file_code, FileCode::max);

        while registry.entries.len() > registry.limit {
            registry.evict_oldest(&mut on_evict);
        }
        registry
    }

    /// Return the code of `identity`, making it the most recent entry.
    ///
    /// Unknown identities are appended; if that would overflow the limit the
    /// least recently used entry is evicted first and `on_evict` is called
    /// with its code before the code can be handed out again.
    pub fn find_or_add(&mut self, identity: &str, mut on_evict: impl FnMut(FileCode)) -> FileCode {
        if let Some(index) = self.entries.iter().rposition(|entry| entry.identity == identity) {
            if let Some(entry) = self.entries.remove(index) {
                let code = entry.code;
                self.entries.push_back(entry);
                return code;
            }
        }

        while self.entries.len() >= self.limit {
            self.evict_oldest(&mut on_evict);
        }

        let code = match self.free_codes.pop() {
            Some(code) => {
                debug!(identity, code = %code, "reusing freed file code");
                code
            }
            None => {
                let code = self.next_file_code;
                self.next_file_code = code.next();
                code
            }
        };
        self.entries.push_back(RecentFileEntry::new(identity, code));
        code
    }

    /// Code of `identity` without touching recency.
    pub fn find_code(&self, identity: &str) -> Option<FileCode> {
        self.lookup(identity).map(|(_, code)| code)
    }

    /// Distance of `identity` from the most recent entry (0 = most recent).
    pub fn position(&self, identity: &str) -> Option<usize> {
        self.lookup(identity).map(|(position, _)| position)
    }

    /// Position and code in one backward scan.
    pub fn lookup(&self, identity: &str) -> Option<(usize, FileCode)> {
        self.entries
            .iter()
            .rev()
            .enumerate()
            .find(|(_, entry)| entry.identity == identity)
            .map(|(position, entry)| (position, entry.code))
    }

    /// Number of tracked files.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no file is tracked.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of tracked files.
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Code handed out when the free list is empty.
    pub fn next_file_code(&self) -> FileCode {
        self.next_file_code
    }

    /// Entries, least recently used first.
    pub fn entries(&self) -> impl Iterator<Item = &RecentFileEntry> {
        self.entries.iter()
    }

    /// Forget every entry. `next_file_code` and the free list are kept.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    fn evict_oldest(&mut self, on_evict: &mut impl FnMut(FileCode)) {
        if let Some(evicted) = self.entries.pop_front() {
            debug!(identity = %evicted.identity, code = %evicted.code, "evicting least recently used file");
            on_evict(evicted.code);
            self.free_codes.push(evicted.code);
        }
    }
}
