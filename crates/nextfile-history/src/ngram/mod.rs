//! Uni-gram / bi-gram open statistics.
//!
//! The tree has two levels of the same [`FrequencyNode`] shape:
//!
//! | Level | Node | `count` | children |
//! |-------|------|---------|----------|
//! | root | [`NGramMapNode`] | all recorded opens | one node per code |
//! | per code | [`NGramListNode`] | opens of that code | opens that directly followed it |

pub mod node;
pub mod store;

pub use node::{Counted, FrequencyNode};
pub use store::{NGramListNode, NGramMapNode, NGramStore};
