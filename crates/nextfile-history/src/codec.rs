//! JSON external form of [`PersistentState`].
//!
//! ```text
//! {
//!   "recent_files": [{ "identity": "src/main.rs", "code": 0 }, ...],
//!   "prev_file": 0,
//!   "next_file_code": 1,
//!   "root": {
//!     "count": 1,
//!     "usages": [{ "code": 0, "count": 1, "codes": [], "counts": [] }, ...]
//!   }
//! }
//! ```
//!
//! `codes` and `counts` are index-aligned. Every map is written in ascending
//! code order so that encoding a decoded document reproduces it exactly.
//!
//! Decoding never fails: a field that does not parse takes its default, a
//! malformed list element is skipped, and a document that is not JSON at all
//! decodes to the empty state.

use std::collections::HashMap;

use nextfile_core::{FileCode, NextFileResult};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::ngram::{NGramListNode, NGramMapNode};
use crate::registry::RecentFileEntry;
use crate::state::PersistentState;

#[derive(Debug, Serialize, Deserialize)]
struct StateDocument {
    #[serde(default, deserialize_with = "lenient_seq")]
    recent_files: Vec<EntryDocument>,
    #[serde(default, deserialize_with = "lenient")]
    prev_file: Option<u32>,
    #[serde(default, deserialize_with = "lenient")]
    next_file_code: u32,
    #[serde(default, deserialize_with = "lenient")]
    root: TreeDocument,
}

#[derive(Debug, Serialize, Deserialize)]
struct EntryDocument {
    identity: String,
    code: u32,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct TreeDocument {
    #[serde(default, deserialize_with = "lenient")]
    count: u64,
    #[serde(default, deserialize_with = "lenient_seq")]
    usages: Vec<NodeDocument>,
}

#[derive(Debug, Serialize, Deserialize)]
struct NodeDocument {
    code: u32,
    #[serde(default, deserialize_with = "lenient")]
    count: u64,
    #[serde(default, deserialize_with = "lenient_seq")]
    codes: Vec<u32>,
    #[serde(default, deserialize_with = "lenient_seq")]
    counts: Vec<u64>,
}

/// Accept any JSON for the field; fall back to the default if it is not a `T`.
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// Accept any JSON for a list field; keep only the elements that are a `T`.
fn lenient_seq<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    let Value::Array(items) = value else {
        return Ok(Vec::new());
    };
    Ok(items
        .into_iter()
        .filter_map(|item| serde_json::from_value(item).ok())
        .collect())
}

impl From<&PersistentState> for StateDocument {
    fn from(state: &PersistentState) -> Self {
        let usages = state
            .root
            .sorted_children()
            .into_iter()
            .map(|(code, node)| {
                let (codes, counts) = node
                    .sorted_children()
                    .into_iter()
                    .map(|(child, count)| (child.value(), *count))
                    .unzip();
                NodeDocument {
                    code: code.value(),
                    count: node.count(),
                    codes,
                    counts,
                }
            })
            .collect();

        Self {
            recent_files: state
                .recent_files
                .iter()
                .map(|entry| EntryDocument {
                    identity: entry.identity.clone(),
                    code: entry.code.value(),
                })
                .collect(),
            prev_file: state.prev_file.map(FileCode::value),
            next_file_code: state.next_file_code.value(),
            root: TreeDocument {
                count: state.root.count(),
                usages,
            },
        }
    }
}

impl From<StateDocument> for PersistentState {
    fn from(document: StateDocument) -> Self {
        let usages: HashMap<FileCode, NGramListNode> = document
            .root
            .usages
            .into_iter()
            .map(|node| {
                let children = node
                    .codes
                    .into_iter()
                    .zip(node.counts)
                    .map(|(code, count)| (FileCode(code), count))
                    .collect();
                (FileCode(node.code), NGramListNode::from_parts(node.count, children))
            })
            .collect();

        Self {
            recent_files: document
                .recent_files
                .into_iter()
                .map(|entry| RecentFileEntry::new(entry.identity, FileCode(entry.code)))
                .collect(),
            prev_file: document.prev_file.map(FileCode),
            next_file_code: FileCode(document.next_file_code),
            root: NGramMapNode::from_parts(document.root.count, usages),
        }
    }
}

/// Structured external form.
pub fn to_value(state: &PersistentState) -> NextFileResult<Value> {
    Ok(serde_json::to_value(StateDocument::from(state))?)
}

/// Encoded external form.
pub fn encode(state: &PersistentState) -> NextFileResult<String> {
    Ok(serde_json::to_string(&StateDocument::from(state))?)
}

/// Rebuild a state from its structured form. Never fails.
pub fn from_value(value: Value) -> PersistentState {
    if !value.is_object() {
        warn!("file history is not a JSON object, starting empty");
        return PersistentState::default();
    }
    match serde_json::from_value::<StateDocument>(value) {
        Ok(document) => document.into(),
        Err(e) => {
            warn!(error = %e, "malformed file history, starting empty");
            PersistentState::default()
        }
    }
}

/// Rebuild a state from its encoded form. Never fails.
pub fn decode(document: &str) -> PersistentState {
    match serde_json::from_str::<Value>(document) {
        Ok(value) => from_value(value),
        Err(e) => {
            warn!(error = %e, "unreadable file history, starting empty");
            PersistentState::default()
        }
    }
}
