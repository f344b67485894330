//! Counted frequency map shared by both levels of the n-gram tree.

use std::collections::HashMap;

use nextfile_core::FileCode;

/// Anything that carries an occurrence count: a leaf counter or a nested node.
pub trait Counted {
    fn count(&self) -> u64;
}

impl Counted for u64 {
    fn count(&self) -> u64 {
        *self
    }
}

/// A node counting events, with one child per observed code.
///
/// `count` is the number of events recorded under this node. It is kept
/// independently of the children because the per-code level counts opens of
/// the code itself while its children count what followed it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyNode<C> {
    count: u64,
    usages: HashMap<FileCode, C>,
}

impl<C> Default for FrequencyNode<C> {
    fn default() -> Self {
        Self {
            count: 0,
            usages: HashMap::new(),
        }
    }
}

impl<C: Counted> Counted for FrequencyNode<C> {
    fn count(&self) -> u64 {
        self.count
    }
}

impl<C: Counted> FrequencyNode<C> {
    /// Node with no events and no children.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a node from persisted parts.
    pub fn from_parts(count: u64, usages: HashMap<FileCode, C>) -> Self {
        Self { count, usages }
    }

    /// Events recorded under this node.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Children keyed by code.
    pub fn usages(&self) -> &HashMap<FileCode, C> {
        &self.usages
    }

    /// Child for `code`, if any.
    pub fn get(&self, code: FileCode) -> Option<&C> {
        self.usages.get(&code)
    }

    /// Count of one child, `0` when the child does not exist.
    pub fn child_count(&self, code: FileCode) -> u64 {
        self.usages.get(&code).map(Counted::count).unwrap_or(0)
    }

    /// Number of children.
    pub fn len(&self) -> usize {
        self.usages.len()
    }

    /// Whether the node has no children.
    pub fn is_empty(&self) -> bool {
        self.usages.is_empty()
    }

    /// Minimum and maximum among the immediate children counts.
    /// `(0, 0)` for a childless node.
    pub fn find_min_max(&self) -> (u64, u64) {
        let mut counts = self.usages.values().map(Counted::count);
        let Some(first) = counts.next() else {
            return (0, 0);
        };
        counts.fold((first, first), |(min, max), count| {
            (min.min(count), max.max(count))
        })
    }

    /// Children in ascending code order.
    pub fn sorted_children(&self) -> Vec<(FileCode, &C)> {
        let mut children: Vec<(FileCode, &C)> =
            self.usages.iter().map(|(code, child)| (*code, child)).collect();
        children.sort_unstable_by_key(|(code, _)| *code);
        children
    }

    /// Sum of the children counts.
    pub fn children_total(&self) -> u64 {
        self.usages.values().map(Counted::count).sum()
    }

    /// Count one more event under this node.
    pub(crate) fn bump(&mut self) {
        self.count = self.count.saturating_add(1);
    }

    /// Lower `count` by `amount`, saturating at zero. Returns the realised decrement.
    pub(crate) fn subtract(&mut self, amount: u64) -> u64 {
        let before = self.count;
        self.count = before.saturating_sub(amount);
        before - self.count
    }

    /// Drop a child and subtract its count from this node.
    /// Returns the realised decrement (`0` when the child did not exist).
    pub(crate) fn remove(&mut self, code: FileCode) -> u64 {
        match self.usages.remove(&code) {
            Some(child) => self.subtract(child.count()),
            None => 0,
        }
    }

    pub(crate) fn children_mut(&mut self) -> impl Iterator<Item = &mut C> {
        self.usages.values_mut()
    }

    pub(crate) fn clear(&mut self) {
        self.count = 0;
        self.usages.clear();
    }
}

impl<C: Counted + Default> FrequencyNode<C> {
    /// Get or create the child for `code`.
    pub(crate) fn child_or_default(&mut self, code: FileCode) -> &mut C {
        self.usages.entry(code).or_default()
    }
}

impl FrequencyNode<u64> {
    /// Count one more occurrence of `code` below this node, leaving this
    /// node's own count untouched.
    pub(crate) fn bump_child(&mut self, code: FileCode) {
        let slot = self.child_or_default(code);
        *slot = slot.saturating_add(1);
    }
}
