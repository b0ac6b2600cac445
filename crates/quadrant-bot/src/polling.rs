//! Long-polling transport.

use std::sync::Arc;
use std::time::Duration;

use futures::future::join_all;
use quadrant_interaction::telegram::{TelegramClient, Update};
use tracing::{debug, info, warn};

use crate::dispatch::Dispatcher;

const RETRY_DELAY_MIN: Duration = Duration::from_secs(1);
const RETRY_DELAY_MAX: Duration = Duration::from_secs(30);

/// Splits a batch into per-participant groups.
///
/// Group order follows the first update of each participant and every group
/// keeps arrival order. Updates without a sender form groups of their own.
pub fn group_by_participant(updates: Vec<Update>) -> Vec<Vec<Update>> {
    let mut groups: Vec<(Option<i64>, Vec<Update>)> = Vec::new();
    for update in updates {
        let sender = update.sender().map(|user| user.id);
        match sender.and_then(|id| groups.iter_mut().find(|(key, _)| *key == Some(id))) {
            Some((_, group)) => group.push(update),
            None => groups.push((sender, vec![update])),
        }
    }
    groups.into_iter().map(|(_, group)| group).collect()
}

/// Offset that acknowledges every update in `updates`.
pub fn next_offset(current: Option<i64>, updates: &[Update]) -> Option<i64> {
    updates
        .iter()
        .map(|u| u.update_id + 1)
        .max()
        .max(current)
}

/// Dispatches one batch: participants concurrently, each participant's
/// updates strictly in order.
pub async fn dispatch_batch(dispatcher: &Dispatcher, updates: Vec<Update>) {
    let groups = group_by_participant(updates);
    join_all(groups.into_iter().map(|group| async move {
        for update in group {
            dispatcher.dispatch(update).await;
        }
    }))
    .await;
}

/// Polls Telegram until the task is cancelled.
///
/// Any webhook left over from an earlier run is removed first, since the
/// Bot API refuses `getUpdates` while one is set.
pub async fn run(
    client: TelegramClient,
    dispatcher: Arc<Dispatcher>,
    timeout_secs: u64,
) -> anyhow::Result<()> {
    client.delete_webhook().await?;
    info!("Long polling started (timeout {}s)", timeout_secs);

    let mut offset = None;
    let mut retry_delay = RETRY_DELAY_MIN;
    loop {
        let updates = match client.get_updates(offset, timeout_secs).await {
            Ok(updates) => {
                retry_delay = RETRY_DELAY_MIN;
                updates
            }
            Err(e) => {
                warn!("getUpdates failed, retrying in {:?}: {}", retry_delay, e);
                tokio::time::sleep(retry_delay).await;
                retry_delay = (retry_delay * 2).min(RETRY_DELAY_MAX);
                continue;
            }
        };

        if updates.is_empty() {
            continue;
        }
        debug!(count = updates.len(), "Received updates");
        offset = next_offset(offset, &updates);
        dispatch_batch(&dispatcher, updates).await;
    }
}
