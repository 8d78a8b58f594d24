//! Error types for draft storage.

/// Failure reported by a [`KeyValueStore`](crate::KeyValueStore).
///
/// These never reach the user: [`DraftStore`](crate::DraftStore) logs and
/// swallows them so a broken store cannot block editing.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// The backing store could not be opened (disabled, private mode, no window).
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// A read failed.
    #[error("failed to read {key}: {reason}")]
    Read { key: String, reason: String },

    /// A write failed, usually because the quota is exhausted.
    #[error("failed to write {key}: {reason}")]
    Write { key: String, reason: String },

    /// A removal failed.
    #[error("failed to remove {key}: {reason}")]
    Remove { key: String, reason: String },
}
