//! Persisted key-value text storage.
//!
//! The card collection is stored as one JSON text under one key. Where that
//! text lives is behind the [`BlobStore`] trait so the repository can run
//! against a directory on disk or against memory.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.local/share/tracker/             # Linux
//! ~/Library/Application Support/tracker/  # macOS
//! └── project-tracker-cards.json
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, instrument, warn};

use crate::error::{Result, StoreError};

/// A persisted key-value store of text values.
pub trait BlobStore {
    /// Reads the value stored under `key`, or `None` if nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns an error if the value exists but cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be written.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// A [`BlobStore`] keeping one file per key in a directory.
///
/// # Examples
///
/// ```no_run
/// use tracker_store::{BlobStore, FileBlobStore};
///
/// # fn example() -> tracker_store::Result<()> {
/// let mut store = FileBlobStore::new()?;
/// store.set("greeting", "hello")?;
/// assert_eq!(store.get("greeting")?.as_deref(), Some("hello"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct FileBlobStore {
    base_path: PathBuf,
}

impl FileBlobStore {
    /// Creates a store in the platform data directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory cannot be determined or
    /// created.
    #[instrument]
    pub fn new() -> Result<Self> {
        let data_dir = dirs::data_dir().ok_or(StoreError::NoDataDirectory)?;
        Self::with_path(data_dir.join("tracker"))
    }

    /// Creates a store rooted at `base_path`, creating the directory if it
    /// doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    #[instrument]
    pub fn with_path(base_path: PathBuf) -> Result<Self> {
        if !base_path.exists() {
            debug!(?base_path, "creating store directory");
            fs::create_dir_all(&base_path).map_err(|e| StoreError::io(&base_path, e))?;
        }
        Ok(Self { base_path })
    }

    /// Returns the directory this store writes into.
    #[must_use]
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Returns the file path for a key.
    ///
    /// Path separators and dots are replaced so a key can never escape the
    /// base directory.
    fn blob_path(&self, key: &str) -> PathBuf {
        let safe_key = key.replace(['/', '\\', '.'], "_");
        self.base_path.join(format!("{safe_key}.json"))
    }
}

impl BlobStore for FileBlobStore {
    #[instrument(skip(self))]
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.blob_path(key);
        match fs::read_to_string(&path) {
            Ok(content) => {
                debug!(?path, bytes = content.len(), "read blob");
                Ok(Some(content))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(?path, "blob not found");
                Ok(None)
            }
            Err(e) => {
                warn!(?path, error = %e, "failed to read blob");
                Err(StoreError::io(path, e))
            }
        }
    }

    #[instrument(skip(self, value), fields(bytes = value.len()))]
    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.blob_path(key);
        fs::write(&path, value).map_err(|e| {
            warn!(?path, error = %e, "failed to write blob");
            StoreError::io(&path, e)
        })?;
        debug!(?path, "blob written");
        Ok(())
    }
}

/// An in-memory [`BlobStore`], used by tests and the demo mode.
///
/// # Examples
///
/// ```
/// use tracker_store::{BlobStore, MemoryBlobStore};
///
/// let mut store = MemoryBlobStore::new();
/// assert_eq!(store.get("k").unwrap(), None);
/// store.set("k", "v").unwrap();
/// assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryBlobStore {
    blobs: HashMap<String, String>,
}

impl MemoryBlobStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding `value` under `key`.
    #[must_use]
    pub fn with_blob(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut blobs = HashMap::new();
        blobs.insert(key.into(), value.into());
        Self { blobs }
    }
}

impl BlobStore for MemoryBlobStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.blobs.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.blobs.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_store() -> (FileBlobStore, TempDir) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let store =
            FileBlobStore::with_path(temp_dir.path().to_path_buf()).expect("Failed to create store");
        (store, temp_dir)
    }

    #[test]
    fn missing_key_reads_none() {
        let (store, _dir) = create_test_store();
        assert_eq!(store.get("absent").unwrap(), None);
    }

    #[test]
    fn set_then_get() {
        let (mut store, _dir) = create_test_store();
        store.set("cards", "[]").unwrap();
        assert_eq!(store.get("cards").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn set_overwrites() {
        let (mut store, _dir) = create_test_store();
        store.set("cards", "first").unwrap();
        store.set("cards", "second").unwrap();
        assert_eq!(store.get("cards").unwrap().as_deref(), Some("second"));
    }

    #[test]
    fn creates_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("a").join("b");
        let store = FileBlobStore::with_path(nested.clone()).unwrap();
        assert!(nested.is_dir());
        assert_eq!(store.base_path(), nested);
    }

    #[test]
    fn keys_cannot_escape_base_dir() {
        let (mut store, dir) = create_test_store();
        store.set("../evil/key", "x").unwrap();

        let entries: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(entries, ["___evil_key.json"]);
    }

    #[test]
    fn unreadable_blob_is_an_error() {
        let (store, dir) = create_test_store();
        // A directory where the file should be makes the read fail.
        fs::create_dir(dir.path().join("cards.json")).unwrap();
        assert!(matches!(store.get("cards"), Err(StoreError::Io { .. })));
    }

    #[test]
    fn memory_store_roundtrip() {
        let mut store = MemoryBlobStore::with_blob("a", "1");
        assert_eq!(store.get("a").unwrap().as_deref(), Some("1"));
        store.set("a", "2").unwrap();
        assert_eq!(store.get("a").unwrap().as_deref(), Some("2"));
        assert_eq!(store.get("b").unwrap(), None);
    }
}
