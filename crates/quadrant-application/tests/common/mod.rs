#![allow(dead_code)]

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use quadrant_core::error::{QuadrantError, Result};
use quadrant_core::locale::Locale;
use quadrant_core::record::{NewResult, RemoteRecordStore, ResultRecord};

/// How the fake remote store behaves.
pub enum Behavior {
    Healthy,
    Failing,
    Hanging,
}

/// In-memory stand-in for the remote record store.
pub struct FakeRemote {
    behavior: Behavior,
    records: Mutex<Vec<ResultRecord>>,
    pub creates: AtomicUsize,
}

impl FakeRemote {
    pub fn new(behavior: Behavior) -> Self {
        Self {
            behavior,
            records: Mutex::new(Vec::new()),
            creates: AtomicUsize::new(0),
        }
    }

    pub fn with_records(behavior: Behavior, records: Vec<ResultRecord>) -> Self {
        Self {
            records: Mutex::new(records),
            ..Self::new(behavior)
        }
    }

    pub fn stored(&self) -> Vec<ResultRecord> {
        self.records.lock().unwrap().clone()
    }

    async fn gate(&self) -> Result<()> {
        match self.behavior {
            Behavior::Healthy => Ok(()),
            Behavior::Failing => Err(QuadrantError::remote(Some(503), "unavailable")),
            Behavior::Hanging => {
                tokio::time::sleep(Duration::from_secs(3600)).await;
                Ok(())
            }
        }
    }
}

#[async_trait]
impl RemoteRecordStore for FakeRemote {
    async fn create(&self, record: &ResultRecord) -> Result<()> {
        self.creates.fetch_add(1, Ordering::SeqCst);
        self.gate().await?;
        self.records.lock().unwrap().push(record.clone());
        Ok(())
    }

    async fn query_all(&self) -> Result<Vec<ResultRecord>> {
        self.gate().await?;
        Ok(self.stored())
    }
}

pub fn new_result(nickname: &str) -> NewResult {
    NewResult {
        nickname: nickname.to_string(),
        emoji: "🦊".to_string(),
        x: 37.5,
        y: 62.5,
        language: Locale::Ua,
        slogan: Some("Воля".to_string()),
        slogan_style: None,
    }
}
