use crate::errors::NextFileResult;

/// Load/save hook for one scope's persisted history.
///
/// The store only moves the encoded document around; encoding and decoding
/// are done by the history codec.
pub trait IHistoryStore: Send + Sync {
    /// Read the last saved document. `Ok(None)` when nothing was saved yet.
    fn load(&self) -> NextFileResult<Option<String>>;

    /// Replace the saved document. Must be all-or-nothing.
    fn save(&self, document: &str) -> NextFileResult<()>;
}
