//! Background group loading tied to a cancellation token.

use std::time::Duration;

use reqwest::Client;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::error::GroupResult;
use crate::log;

use super::{GroupList, GroupSource};

/// Handle to an in-flight load. Dropping it cancels the load.
pub struct LoadTask {
    token: CancellationToken,
    _handle: JoinHandle<()>,
}

impl LoadTask {
    /// Stop the load; its result will never be delivered
    pub fn cancel(&self) {
        self.token.cancel();
    }
}

impl Drop for LoadTask {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

/// Load `source` on a background task and deliver the result on `tx`.
///
/// Once the returned task is cancelled nothing is sent, and the sender is
/// dropped so the receiving side observes a closed channel.
pub fn spawn_load(
    source: GroupSource,
    client: Client,
    timeout: Duration,
    tx: mpsc::Sender<GroupResult<GroupList>>,
) -> LoadTask {
    let token = CancellationToken::new();
    let cancelled = token.clone();

    log::log_event(&format!("loading groups from {}", source.describe()));

    let handle = tokio::spawn(async move {
        tokio::select! {
            biased;
            _ = cancelled.cancelled() => {
                log::log_event("group load cancelled");
            }
            result = source.load(&client, timeout) => {
                if cancelled.is_cancelled() {
                    return;
                }
                match &result {
                    Ok(groups) => log::log_event(&format!("loaded {} groups", groups.len())),
                    Err(e) => log::log_event(&format!("group load failed: {}", e)),
                }
                let _ = tx.send(result).await;
            }
        }
    });

    LoadTask {
        token,
        _handle: handle,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::groups::GroupItem;
    use crate::test_support;

    #[tokio::test]
    async fn test_load_delivers_result() {
        let (tx, mut rx) = mpsc::channel(1);
        let _task = spawn_load(
            GroupSource::default(),
            test_support::client(),
            Duration::from_secs(5),
            tx,
        );

        let groups = rx.recv().await.unwrap().unwrap();
        assert_eq!(groups[0], GroupItem::named("Exercises"));
    }

    #[tokio::test]
    async fn test_cancelled_load_never_reports() {
        let url = test_support::serve_hanging().await;
        let (tx, mut rx) = mpsc::channel(1);
        let task = spawn_load(
            GroupSource::Remote { url },
            test_support::client(),
            Duration::from_secs(30),
            tx,
        );

        tokio::time::sleep(Duration::from_millis(50)).await;
        drop(task);

        let received = tokio::time::timeout(Duration::from_secs(2), rx.recv())
            .await
            .expect("channel should close once the load is cancelled");
        assert!(received.is_none());
    }

    #[tokio::test]
    async fn test_cancel_before_spawned_task_runs() {
        let (tx, mut rx) = mpsc::channel(1);
        let task = spawn_load(
            GroupSource::default(),
            test_support::client(),
            Duration::from_secs(5),
            tx,
        );
        task.cancel();

        let received = tokio::time::timeout(Duration::from_secs(2), rx.recv())
            .await
            .unwrap();
        assert!(received.is_none());
        assert!(task.token.is_cancelled());
    }
}
