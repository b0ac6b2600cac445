mod common;

use std::sync::Arc;
use std::sync::atomic::Ordering;
use std::time::Duration;

use common::{Behavior, FakeRemote, new_result};
use quadrant_application::{RecordSource, ResultService, SaveDestination};
use quadrant_core::record::{KeyValueStore, RecordId, RemoteStore};
use quadrant_infrastructure::local_cache::RESULTS_CACHE_KEY;
use quadrant_infrastructure::{FileKeyValueStore, MemoryKeyValueStore};
use tempfile::TempDir;

fn service(remote: Arc<FakeRemote>, local: Arc<dyn KeyValueStore>) -> ResultService {
    ResultService::new(RemoteStore::Enabled(remote), local)
}

#[tokio::test]
async fn save_with_healthy_remote_uses_remote_id() {
    let remote = Arc::new(FakeRemote::new(Behavior::Healthy));
    let local = Arc::new(MemoryKeyValueStore::new());
    let service = service(remote.clone(), local);

    let receipt = service.save(new_result("neo")).await.unwrap();
    assert_eq!(receipt.destination, SaveDestination::Remote);
    assert!(!receipt.record.id.is_local());
    assert_eq!(remote.stored(), vec![receipt.record.clone()]);

    let outcome = service.fetch_all().await;
    assert_eq!(outcome.source, RecordSource::Remote);
    assert_eq!(outcome.records, vec![receipt.record]);
}

#[tokio::test]
async fn save_with_failing_remote_falls_back_to_local() {
    let remote = Arc::new(FakeRemote::new(Behavior::Failing));
    let service = service(remote.clone(), Arc::new(MemoryKeyValueStore::new()));

    let input = new_result("offline");
    let receipt = service.save(input.clone()).await.unwrap();
    assert_eq!(receipt.destination, SaveDestination::LocalOnly);
    assert!(receipt.record.id.is_local());
    assert_eq!(remote.creates.load(Ordering::SeqCst), 1);

    let outcome = service.fetch_all().await;
    assert_eq!(outcome.source, RecordSource::LocalCache);
    assert_eq!(outcome.records.len(), 1);

    // Equal to the input up to id and timestamp.
    let stored = &outcome.records[0];
    assert_eq!(stored.nickname, input.nickname);
    assert_eq!(stored.emoji, input.emoji);
    assert_eq!(stored.x, input.x);
    assert_eq!(stored.y, input.y);
    assert_eq!(stored.language, input.language);
    assert_eq!(stored.slogan, input.slogan);
}

#[tokio::test(start_paused = true)]
async fn remote_timeout_counts_as_failure() {
    let remote = Arc::new(FakeRemote::new(Behavior::Hanging));
    let service = service(remote, Arc::new(MemoryKeyValueStore::new()))
        .with_remote_timeout(Duration::from_secs(10));

    let receipt = service.save(new_result("slow")).await.unwrap();
    assert_eq!(receipt.destination, SaveDestination::LocalOnly);
    assert!(receipt.record.id.is_local());

    let outcome = service.fetch_all().await;
    assert_eq!(outcome.source, RecordSource::LocalCache);
    assert_eq!(outcome.records, vec![receipt.record]);
}

#[tokio::test]
async fn empty_remote_list_keeps_local_cache() {
    let local = Arc::new(MemoryKeyValueStore::new());
    let offline = ResultService::new(RemoteStore::Disabled, local.clone());
    let cached = offline.save(new_result("cached")).await.unwrap().record;

    let remote = Arc::new(FakeRemote::new(Behavior::Healthy));
    let online = service(remote, local.clone());

    let outcome = online.fetch_all().await;
    assert_eq!(outcome.source, RecordSource::LocalCache);
    assert_eq!(outcome.records, vec![cached]);
    assert!(local.get(RESULTS_CACHE_KEY).await.unwrap().is_some());
}

#[tokio::test]
async fn non_empty_remote_list_overwrites_cache() {
    let local = Arc::new(MemoryKeyValueStore::new());
    let offline = ResultService::new(RemoteStore::Disabled, local.clone());
    offline.save(new_result("stale")).await.unwrap();

    let shared = new_result("shared").into_record(RecordId::new_remote());
    let remote = Arc::new(FakeRemote::with_records(Behavior::Healthy, vec![shared.clone()]));
    let online = service(remote, local.clone());

    let outcome = online.fetch_all().await;
    assert_eq!(outcome.source, RecordSource::Remote);
    assert_eq!(outcome.records, vec![shared.clone()]);

    // The refreshed cache is what an offline reader now sees.
    assert_eq!(offline.fetch_all().await.records, vec![shared]);
}

#[tokio::test]
async fn corrupt_cache_reads_as_empty() {
    let local = Arc::new(MemoryKeyValueStore::new());
    local
        .set(RESULTS_CACHE_KEY, "not json at all".to_string())
        .await
        .unwrap();
    let service = ResultService::new(RemoteStore::Disabled, local);

    assert!(service.fetch_all().await.records.is_empty());
    service.save(new_result("after")).await.unwrap();
    assert_eq!(service.fetch_all().await.records.len(), 1);
}

#[tokio::test]
async fn save_limit_persists_across_restarts() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("store.json");
    let remote = Arc::new(FakeRemote::new(Behavior::Healthy));

    let first = service(remote.clone(), Arc::new(FileKeyValueStore::new(path.clone())))
        .with_save_limit(Some(1));
    first.save(new_result("once")).await.unwrap();

    let restarted = service(remote.clone(), Arc::new(FileKeyValueStore::new(path)))
        .with_save_limit(Some(1));
    assert_eq!(restarted.save_count().await, 1);
    assert!(restarted.save(new_result("twice")).await.unwrap_err().is_save_limit());
    assert_eq!(remote.creates.load(Ordering::SeqCst), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_saves_keep_every_record_and_count() {
    let temp_dir = TempDir::new().unwrap();
    let local = Arc::new(FileKeyValueStore::new(temp_dir.path().join("store.json")));
    let service = Arc::new(ResultService::new(RemoteStore::Disabled, local));

    let handles: Vec<_> = (0..20)
        .map(|i| {
            let service = service.clone();
            tokio::spawn(async move { service.save(new_result(&format!("user{i}"))).await })
        })
        .collect();
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let outcome = service.fetch_all().await;
    assert_eq!(outcome.records.len(), 20);
    assert_eq!(service.save_count().await, 20);
}
