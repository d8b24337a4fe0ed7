//! Error types for the progression engine and snapshot stores.

use std::path::PathBuf;

use lr_core::CoreError;

/// Result type for snapshot store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors raised by a [`SnapshotStore`](crate::storage::SnapshotStore).
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Reading or writing the backing file failed.
    #[error("cannot access {path}: {source}")]
    Io {
        /// The file that could not be accessed.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The stored snapshot could not be parsed or failed validation.
    #[error("stored snapshot is malformed: {0}")]
    Malformed(CoreError),

    /// The snapshot could not be encoded for storage.
    #[error("cannot encode snapshot: {0}")]
    Encode(CoreError),
}

/// Errors raised by the [`ProgressionEngine`](crate::engine::ProgressionEngine).
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// The operation needs a signed-in player.
    #[error("no active player; register or resume a session first")]
    NotAuthenticated,

    /// Registration was attempted while a player is signed in.
    #[error("a player is already signed in")]
    AlreadyAuthenticated,

    /// The display name was blank.
    #[error("player name must not be empty")]
    InvalidName,

    /// The stored snapshot was unreadable; the session stays uninitialized.
    #[error("stored player is corrupt: {0}")]
    CorruptSnapshot(StoreError),

    /// The snapshot store failed; the session was left unchanged.
    #[error("storage error: {0}")]
    Storage(#[from] StoreError),
}
