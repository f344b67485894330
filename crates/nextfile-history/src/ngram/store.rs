use nextfile_core::FileCode;
use tracing::debug;

use super::node::FrequencyNode;

/// Per-code node: counts opens of the code, children count the codes that followed it.
pub type NGramListNode = FrequencyNode<u64>;

/// Root node: counts every open, one [`NGramListNode`] per code.
pub type NGramMapNode = FrequencyNode<NGramListNode>;

/// Incrementally maintained n-gram counts keyed by [`FileCode`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NGramStore {
    root: NGramMapNode,
}

impl NGramStore {
    /// Store with no recorded opens.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store over a restored tree.
    pub fn from_root(root: NGramMapNode) -> Self {
        Self { root }
    }

    /// The whole tree.
    pub fn root(&self) -> &NGramMapNode {
        &self.root
    }

    /// Record one open of `code`, optionally right after `previous`.
    pub fn record(&mut self, code: FileCode, previous: Option<FileCode>) {
        self.root.bump();
        self.root.child_or_default(code).bump();
        if let Some(previous) = previous {
            self.root.child_or_default(previous).bump_child(code);
        }
    }

    /// Forget every statistic involving `code`.
    ///
    /// Removes its uni-gram node, then strips it as a follower from every other
    /// node. The bi-gram counts removed from a node are taken off that node's
    /// count and off the root total, so the root stays equal to the sum of its
    /// children. Returns the number of events removed from the root.
    pub fn purge(&mut self, code: FileCode) -> u64 {
        let mut removed = self.root.remove(code);
        let followers: u64 = self.root.children_mut().map(|node| node.remove(code)).sum();
        removed += self.root.subtract(followers);
        if removed > 0 {
            debug!(code = %code, removed, "purged n-gram statistics");
        }
        removed
    }

    /// Node holding the uni-gram count of `code`.
    pub fn uni_gram_node(&self, code: FileCode) -> Option<&NGramListNode> {
        self.root.get(code)
    }

    /// Node holding what followed `previous`.
    pub fn bi_gram_node(&self, previous: FileCode) -> Option<&NGramListNode> {
        self.root.get(previous)
    }

    /// Total number of recorded opens.
    pub fn total_count(&self) -> u64 {
        self.root.count()
    }

    /// Whether the root total equals the sum of its children.
    pub fn is_consistent(&self) -> bool {
        self.root.count() == self.root.children_total()
    }

    /// Drop every count.
    pub fn clear(&mut self) {
        self.root.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: FileCode = FileCode(0);
    const B: FileCode = FileCode(1);
    const C: FileCode = FileCode(2);

    #[test]
    fn record_counts_uni_and_bi_grams() {
        let mut store = NGramStore::new();
        store.record(A, None);
        store.record(B, Some(A));
        store.record(A, Some(B));

        assert_eq!(store.total_count(), 3);
        assert_eq!(store.uni_gram_node(A).map(|n| n.count()), Some(2));
        assert_eq!(store.bi_gram_node(A).map(|n| n.child_count(B)), Some(1));
        assert_eq!(store.bi_gram_node(B).map(|n| n.child_count(A)), Some(1));
        assert!(store.is_consistent());
    }

    #[test]
    fn record_creates_missing_previous_node() {
        let mut store = NGramStore::new();
        store.record(A, Some(C));
        let node = store.bi_gram_node(C).expect("previous node created");
        assert_eq!(node.count(), 0);
        assert_eq!(node.child_count(A), 1);
        assert!(store.is_consistent());
    }

    #[test]
    fn purge_removes_code_everywhere() {
        let mut store = NGramStore::new();
        store.record(A, None);
        store.record(B, Some(A));
        store.record(C, Some(B));
        store.record(B, Some(C));

        store.purge(B);

        assert!(store.uni_gram_node(B).is_none());
        assert_eq!(store.bi_gram_node(A).map(|n| n.child_count(B)), Some(0));
        assert_eq!(store.bi_gram_node(C).map(|n| n.child_count(B)), Some(0));
        assert!(store.is_consistent());
    }

    #[test]
    fn purge_unknown_code_is_noop() {
        let mut store = NGramStore::new();
        store.record(A, None);
        let before = store.clone();
        assert_eq!(store.purge(FileCode(42)), 0);
        assert_eq!(store, before);
    }
}
