//! Key-value persistence boundary.
//!
//! The journal keeps all of its state under a handful of named string keys.
//! [`KeyValueStore`] is the only thing the rest of the crate knows about
//! persistence, so the journal logic runs unchanged against the in-memory
//! [`MemoryStore`] in tests and the file-backed [`FileStore`] in the binary.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use directories::ProjectDirs;
use thiserror::Error;
use tokio::sync::RwLock;

/// Errors produced by the store layer.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to determine a platform data directory.
    #[error("could not determine application data directory")]
    NoDataDir,

    /// Underlying filesystem error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Asynchronous get/set/remove over named string keys.
///
/// A missing key reads as `Ok(None)`, never as an error. Each `set`
/// replaces the key's entire value.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
    async fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// In-memory store for tests and ephemeral sessions.
#[derive(Default)]
pub struct MemoryStore {
    values: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.values.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.values.write().await.remove(key);
        Ok(())
    }
}

/// File-backed store keeping one JSON file per key.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open (or create) the default store in the platform data directory:
    /// - Linux:   `~/.local/share/zen-journal`
    /// - macOS:   `~/Library/Application Support/app.zen-journal.zen-journal`
    /// - Windows: `{FOLDERID_RoamingAppData}\zen-journal\zen-journal\data`
    pub fn open_default() -> Result<Self, StoreError> {
        let project_dirs =
            ProjectDirs::from("app", "zen-journal", "zen-journal").ok_or(StoreError::NoDataDir)?;
        Self::open_at(project_dirs.data_dir())
    }

    /// Open (or create) a store rooted at an explicit directory.
    ///
    /// This is useful for tests and for embedding the journal inside custom
    /// directory layouts.
    pub fn open_at(dir: &Path) -> Result<Self, StoreError> {
        std::fs::create_dir_all(dir)?;
        tracing::debug!(dir = %dir.display(), "opened file store");
        Ok(Self {
            dir: dir.to_path_buf(),
        })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        match tokio::fs::read_to_string(self.path_for(key)).await {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        tokio::fs::write(self.path_for(key), value).await?;
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        match tokio::fs::remove_file(self.path_for(key)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
