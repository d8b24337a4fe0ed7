//! Snapshot stores.
//!
//! The engine hands a complete player snapshot to a store after every
//! change and asks for it back when a session resumes. A store keeps at
//! most one snapshot.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use lr_core::Player;

use crate::error::{StoreError, StoreResult};

/// Persistence for a single player snapshot.
pub trait SnapshotStore {
    /// Load the stored snapshot, or `None` if nothing is stored.
    fn load(&self) -> StoreResult<Option<Player>>;

    /// Replace the stored snapshot.
    fn save(&mut self, player: &Player) -> StoreResult<()>;

    /// Remove the stored snapshot. Clearing an empty store is not an error.
    fn clear(&mut self) -> StoreResult<()>;
}

/// Stores the snapshot as pretty-printed JSON in `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// A store for `key` inside `dir`. Nothing is touched until the first save.
    pub fn new(dir: impl AsRef<Path>, key: &str) -> Self {
        Self {
            path: dir.as_ref().join(format!("{key}.json")),
        }
    }

    /// Path of the snapshot file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl SnapshotStore for JsonFileStore {
    fn load(&self) -> StoreResult<Option<Player>> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(self.io_error(e)),
        };
        Player::from_json(&json)
            .map(Some)
            .map_err(StoreError::Malformed)
    }

    fn save(&mut self, player: &Player) -> StoreResult<()> {
        let json = player.to_json().map_err(StoreError::Encode)?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }
        // Replace via rename; readers never see a partial file.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json).map_err(|e| self.io_error(e))?;
        fs::rename(&tmp, &self.path).map_err(|e| self.io_error(e))?;
        tracing::debug!(path = %self.path.display(), "snapshot saved");
        Ok(())
    }

    fn clear(&mut self) -> StoreResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(self.io_error(e)),
        }
    }
}

/// Keeps the serialized snapshot in memory.
///
/// Snapshots still go through JSON, so a `MemoryStore` catches the same
/// encoding problems a file store would.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    blob: Option<String>,
}

impl MemoryStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store preloaded with raw text, valid or not.
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self {
            blob: Some(raw.into()),
        }
    }

    /// The raw stored text, if any.
    pub fn raw(&self) -> Option<&str> {
        self.blob.as_deref()
    }
}

impl SnapshotStore for MemoryStore {
    fn load(&self) -> StoreResult<Option<Player>> {
        self.blob
            .as_deref()
            .map(|json| Player::from_json(json).map_err(StoreError::Malformed))
            .transpose()
    }

    fn save(&mut self, player: &Player) -> StoreResult<()> {
        self.blob = Some(player.to_json().map_err(StoreError::Encode)?);
        Ok(())
    }

    fn clear(&mut self) -> StoreResult<()> {
        self.blob = None;
        Ok(())
    }
}
