//! Storage seams for result records.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;

use super::model::ResultRecord;
use crate::error::Result;

/// A remote, shared store of result records.
///
/// # Implementation Notes
///
/// Implementations should:
/// - Accept the client-chosen id carried by the record
/// - Map transport and HTTP failures to `QuadrantError::Remote`
#[async_trait]
pub trait RemoteRecordStore: Send + Sync {
    /// Writes one record under its id.
    ///
    /// # Arguments
    ///
    /// * `record` - The record to store; `record.id` is a remote id
    async fn create(&self, record: &ResultRecord) -> Result<()>;

    /// Retrieves every stored record.
    ///
    /// # Returns
    ///
    /// - `Ok(Vec<ResultRecord>)`: All stored records (possibly empty)
    /// - `Err(QuadrantError)`: The store could not be reached or answered badly
    async fn query_all(&self) -> Result<Vec<ResultRecord>>;
}

/// A device-local string key-value store.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>>;

    async fn set(&self, key: &str, value: String) -> Result<()>;

    async fn remove(&self, key: &str) -> Result<()>;
}

/// Whether a remote store is configured.
#[derive(Clone, Default)]
pub enum RemoteStore {
    Enabled(Arc<dyn RemoteRecordStore>),
    #[default]
    Disabled,
}

impl RemoteStore {
    pub fn enabled(store: impl RemoteRecordStore + 'static) -> Self {
        RemoteStore::Enabled(Arc::new(store))
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self, RemoteStore::Enabled(_))
    }

    pub fn as_store(&self) -> Option<&Arc<dyn RemoteRecordStore>> {
        match self {
            RemoteStore::Enabled(store) => Some(store),
            RemoteStore::Disabled => None,
        }
    }
}

impl fmt::Debug for RemoteStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RemoteStore::Enabled(_) => f.write_str("RemoteStore::Enabled"),
            RemoteStore::Disabled => f.write_str("RemoteStore::Disabled"),
        }
    }
}
