//! Device-local key-value stores.
//!
//! [`FileKeyValueStore`] keeps every key in one JSON document written through
//! [`AtomicJsonFile`]; [`MemoryKeyValueStore`] keeps them in process memory.

use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tokio::task;

use quadrant_core::error::{QuadrantError, Result};
use quadrant_core::record::KeyValueStore;

use crate::storage::AtomicJsonFile;

type Document = BTreeMap<String, String>;

/// Key-value store backed by a single JSON file.
///
/// # Design
///
/// - **Atomic**: every write goes through a locked read-modify-write of the
///   whole document
/// - **Async-safe**: file work runs in `tokio::task::spawn_blocking`
#[derive(Clone)]
pub struct FileKeyValueStore {
    file: Arc<AtomicJsonFile<Document>>,
}

impl FileKeyValueStore {
    pub fn new(path: PathBuf) -> Self {
        Self {
            file: Arc::new(AtomicJsonFile::new(path)),
        }
    }

    pub fn path(&self) -> PathBuf {
        self.file.path().to_path_buf()
    }

    async fn blocking<T, F>(&self, op: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&AtomicJsonFile<Document>) -> Result<T> + Send + 'static,
    {
        let file = Arc::clone(&self.file);
        task::spawn_blocking(move || op(&file))
            .await
            .map_err(|e| QuadrantError::internal(format!("Failed to join task: {}", e)))?
    }
}

#[async_trait]
impl KeyValueStore for FileKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let key = key.to_string();
        self.blocking(move |file| {
            let document = file.load()?.unwrap_or_default();
            Ok(document.get(&key).cloned())
        })
        .await
    }

    async fn set(&self, key: &str, value: String) -> Result<()> {
        let key = key.to_string();
        self.blocking(move |file| {
            file.update(Document::new(), |document| {
                document.insert(key, value);
                Ok(())
            })?;
            Ok(())
        })
        .await
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let key = key.to_string();
        self.blocking(move |file| {
            file.update(Document::new(), |document| {
                document.remove(&key);
                Ok(())
            })?;
            Ok(())
        })
        .await
    }
}

/// Key-value store that lives only as long as the process.
#[derive(Clone, Default)]
pub struct MemoryKeyValueStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for MemoryKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> Result<()> {
        self.entries.write().await.insert(key.to_string(), value);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        self.entries.write().await.remove(key);
        Ok(())
    }
}
