//! The local result cache.
//!
//! Two keys inside one [`KeyValueStore`]:
//! - `pq_results_cache`: JSON array of result records
//! - `pq_save_count`: decimal count of results this device submitted

use std::sync::Arc;

use tokio::sync::Mutex;

use quadrant_core::error::Result;
use quadrant_core::record::{KeyValueStore, ResultRecord};

pub const RESULTS_CACHE_KEY: &str = "pq_results_cache";
pub const SAVE_COUNT_KEY: &str = "pq_save_count";

/// Typed access to the cached records and the save counter.
///
/// Every read-modify-write runs under `write_lock`, shared by clones, so
/// concurrent saves never drop each other's records or counts.
#[derive(Clone)]
pub struct LocalCache {
    store: Arc<dyn KeyValueStore>,
    write_lock: Arc<Mutex<()>>,
}

impl LocalCache {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Loads the cached records.
    ///
    /// An absent, unreadable or corrupt cache reads as empty; the problem is
    /// logged and never surfaces as an error.
    pub async fn load(&self) -> Vec<ResultRecord> {
        let raw = match self.store.get(RESULTS_CACHE_KEY).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!(error = %e, "Local cache unreadable, treating as empty");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<ResultRecord>>(&raw) {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!(error = %e, "Local cache is corrupt, treating as empty");
                Vec::new()
            }
        }
    }

    /// Replaces the cached records.
    pub async fn replace(&self, records: &[ResultRecord]) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        self.write_records(records).await
    }

    /// Appends one record to the cache.
    pub async fn append(&self, record: ResultRecord) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        let mut records = self.load().await;
        records.push(record);
        self.write_records(&records).await
    }

    async fn write_records(&self, records: &[ResultRecord]) -> Result<()> {
        let raw = serde_json::to_string(records)?;
        self.store.set(RESULTS_CACHE_KEY, raw).await
    }

    /// Number of results this device has submitted. Unparsable values read
    /// as zero.
    pub async fn save_count(&self) -> u32 {
        match self.store.get(SAVE_COUNT_KEY).await {
            Ok(Some(raw)) => raw.trim().parse().unwrap_or(0),
            Ok(None) => 0,
            Err(e) => {
                tracing::warn!(error = %e, "Save counter unreadable, treating as zero");
                0
            }
        }
    }

    /// Increments the save counter, saturating at `u32::MAX`.
    ///
    /// # Returns
    ///
    /// The new count.
    pub async fn increment_save_count(&self) -> Result<u32> {
        let _guard = self.write_lock.lock().await;
        let next = self.save_count().await.saturating_add(1);
        self.store.set(SAVE_COUNT_KEY, next.to_string()).await?;
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key_value::{FileKeyValueStore, MemoryKeyValueStore};
    use quadrant_core::locale::Locale;
    use quadrant_core::record::{NewResult, RecordId};
    use tempfile::TempDir;

    fn record(nickname: &str) -> ResultRecord {
        NewResult {
            nickname: nickname.to_string(),
            emoji: "🦊".to_string(),
            x: 10.0,
            y: 20.0,
            language: Locale::En,
            slogan: None,
            slogan_style: None,
        }
        .into_record(RecordId::new_local())
    }

    #[tokio::test]
    async fn test_append_preserves_order() {
        let cache = LocalCache::new(Arc::new(MemoryKeyValueStore::new()));
        assert!(cache.load().await.is_empty());

        cache.append(record("a")).await.unwrap();
        cache.append(record("b")).await.unwrap();

        let names: Vec<_> = cache.load().await.into_iter().map(|r| r.nickname).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[tokio::test]
    async fn test_corrupt_cache_reads_empty() {
        let store = Arc::new(MemoryKeyValueStore::new());
        store
            .set(RESULTS_CACHE_KEY, "{\"not\": \"a list\"}".to_string())
            .await
            .unwrap();
        let cache = LocalCache::new(store);

        assert!(cache.load().await.is_empty());
        cache.append(record("fresh")).await.unwrap();
        assert_eq!(cache.load().await.len(), 1);
    }

    #[tokio::test]
    async fn test_save_counter() {
        let store = Arc::new(MemoryKeyValueStore::new());
        let cache = LocalCache::new(store.clone());
        assert_eq!(cache.save_count().await, 0);
        assert_eq!(cache.increment_save_count().await.unwrap(), 1);
        assert_eq!(cache.increment_save_count().await.unwrap(), 2);
        assert_eq!(store.get(SAVE_COUNT_KEY).await.unwrap().as_deref(), Some("2"));

        store.set(SAVE_COUNT_KEY, "garbage".to_string()).await.unwrap();
        assert_eq!(cache.save_count().await, 0);

        store.set(SAVE_COUNT_KEY, u32::MAX.to_string()).await.unwrap();
        assert_eq!(cache.increment_save_count().await.unwrap(), u32::MAX);
    }

    #[tokio::test]
    async fn test_file_backed_cache_survives_reopen() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("store.json");

        let cache = LocalCache::new(Arc::new(FileKeyValueStore::new(path.clone())));
        cache.append(record("persisted")).await.unwrap();
        cache.increment_save_count().await.unwrap();

        let reopened = LocalCache::new(Arc::new(FileKeyValueStore::new(path)));
        assert_eq!(reopened.load().await[0].nickname, "persisted");
        assert_eq!(reopened.save_count().await, 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_appends_keep_every_record() {
        let temp_dir = TempDir::new().unwrap();
        let cache = LocalCache::new(Arc::new(FileKeyValueStore::new(
            temp_dir.path().join("store.json"),
        )));

        let handles: Vec<_> = (0..20)
            .map(|i| {
                let cache = cache.clone();
                tokio::spawn(async move {
                    cache.append(record(&format!("user{i}"))).await.unwrap();
                    cache.increment_save_count().await.unwrap();
                })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(cache.load().await.len(), 20);
        assert_eq!(cache.save_count().await, 20);
    }
}
