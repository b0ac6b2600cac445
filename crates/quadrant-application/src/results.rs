//! Result persistence use case.
//!
//! `ResultService` is the single entry point for storing and listing survey
//! results. It combines the optional remote store with the device-local
//! cache so that a completed survey is never lost:
//!
//! - Remote writes are bounded by a timeout; any failure falls back to the
//!   local cache under a `local-` id.
//! - Listing prefers the remote store and refreshes the cache from it, but
//!   an empty remote answer never wipes a non-empty cache.

use std::sync::Arc;
use std::time::Duration;

use quadrant_core::error::{QuadrantError, Result};
use quadrant_core::record::{
    KeyValueStore, NewResult, RecordId, RemoteRecordStore, RemoteStore, ResultRecord,
};
use quadrant_infrastructure::LocalCache;

pub const DEFAULT_REMOTE_TIMEOUT: Duration = Duration::from_secs(10);

/// Where a saved record ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveDestination {
    /// Stored remotely and mirrored in the local cache.
    Remote,
    /// Stored in the local cache only.
    LocalOnly,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SaveReceipt {
    pub record: ResultRecord,
    pub destination: SaveDestination,
    /// Saves left on this device, `None` when unlimited.
    pub remaining_saves: Option<u32>,
}

/// Where a listing came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordSource {
    Remote,
    LocalCache,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FetchOutcome {
    pub records: Vec<ResultRecord>,
    pub source: RecordSource,
}

/// Stores and lists survey results.
pub struct ResultService {
    remote: RemoteStore,
    cache: LocalCache,
    save_limit: Option<u32>,
    remote_timeout: Duration,
}

impl ResultService {
    /// Creates a service without a save limit.
    ///
    /// # Arguments
    ///
    /// * `remote` - The remote store capability
    /// * `local` - Device-local key-value store holding the cache
    pub fn new(remote: RemoteStore, local: Arc<dyn KeyValueStore>) -> Self {
        Self {
            remote,
            cache: LocalCache::new(local),
            save_limit: None,
            remote_timeout: DEFAULT_REMOTE_TIMEOUT,
        }
    }

    /// Caps the number of results this device may save.
    pub fn with_save_limit(mut self, limit: Option<u32>) -> Self {
        self.save_limit = limit;
        self
    }

    pub fn with_remote_timeout(mut self, timeout: Duration) -> Self {
        self.remote_timeout = timeout;
        self
    }

    pub fn is_remote_enabled(&self) -> bool {
        self.remote.is_enabled()
    }

    pub fn save_limit(&self) -> Option<u32> {
        self.save_limit
    }

    pub async fn save_count(&self) -> u32 {
        self.cache.save_count().await
    }

    /// Saves left on this device, `None` when unlimited.
    pub async fn remaining_saves(&self) -> Option<u32> {
        let limit = self.save_limit?;
        Some(limit.saturating_sub(self.save_count().await))
    }

    /// Persists a completed survey.
    ///
    /// # Returns
    ///
    /// - `Ok(SaveReceipt)`: The stored record and where it went
    /// - `Err(QuadrantError::SaveLimitReached)`: The device hit its save
    ///   limit; nothing was sent anywhere
    ///
    /// Remote and cache failures never surface as errors here.
    pub async fn save(&self, new: NewResult) -> Result<SaveReceipt> {
        if let Some(limit) = self.save_limit {
            if self.save_count().await >= limit {
                return Err(QuadrantError::SaveLimitReached { limit });
            }
        }

        let (record, destination) = match self.remote.as_store() {
            Some(store) => {
                let record = new.into_record(RecordId::new_remote());
                match self.create_remote(store.as_ref(), &record).await {
                    Ok(()) => {
                        tracing::info!(id = %record.id, "Result saved to remote store");
                        (record, SaveDestination::Remote)
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "Remote save failed, persisting locally");
                        (record.with_id(RecordId::new_local()), SaveDestination::LocalOnly)
                    }
                }
            }
            None => (
                new.into_record(RecordId::new_local()),
                SaveDestination::LocalOnly,
            ),
        };

        if let Err(e) = self.cache.append(record.clone()).await {
            tracing::warn!(error = %e, id = %record.id, "Failed to update local cache");
        }
        if let Err(e) = self.cache.increment_save_count().await {
            tracing::warn!(error = %e, "Failed to update save counter");
        }

        Ok(SaveReceipt {
            record,
            destination,
            remaining_saves: self.remaining_saves().await,
        })
    }

    /// Lists every known result, preferring the remote store.
    pub async fn fetch_all(&self) -> FetchOutcome {
        if let Some(store) = self.remote.as_store() {
            match self.query_remote(store.as_ref()).await {
                Ok(records) if !records.is_empty() => {
                    if let Err(e) = self.cache.replace(&records).await {
                        tracing::warn!(error = %e, "Failed to refresh local cache");
                    }
                    return FetchOutcome {
                        records,
                        source: RecordSource::Remote,
                    };
                }
                Ok(_) => {
                    tracing::warn!("Remote store returned no records, keeping local cache");
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Remote fetch failed, falling back to local cache");
                }
            }
        }

        FetchOutcome {
            records: self.cache.load().await,
            source: RecordSource::LocalCache,
        }
    }

    async fn create_remote(&self, store: &dyn RemoteRecordStore, record: &ResultRecord) -> Result<()> {
        tokio::time::timeout(self.remote_timeout, store.create(record))
            .await
            .map_err(|_| self.timeout_error("remote save"))?
    }

    async fn query_remote(&self, store: &dyn RemoteRecordStore) -> Result<Vec<ResultRecord>> {
        tokio::time::timeout(self.remote_timeout, store.query_all())
            .await
            .map_err(|_| self.timeout_error("remote fetch"))?
    }

    fn timeout_error(&self, operation: &str) -> QuadrantError {
        QuadrantError::timeout(operation, self.remote_timeout.as_millis() as u64)
    }
}
