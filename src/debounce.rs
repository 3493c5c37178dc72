use crate::storage::Store;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::AbortHandle;
use tracing::warn;

/// How long rapid metric updates coalesce before a single disk write.
pub const FLUSH_DELAY: Duration = Duration::from_millis(500);

/// Per-user debounced persistence.
///
/// Each metric update reschedules that user's pending flush; the in-memory
/// ledger is already current before the flush fires, so cancelled writes
/// lose nothing. Flush failures are logged and the optimistic state stands.
#[derive(Clone, Default)]
pub struct Flusher {
    pending: Arc<Mutex<HashMap<String, AbortHandle>>>,
}

impl Flusher {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn schedule(&self, user_id: &str, store: Store) {
        let mut pending = self.pending.lock().await;
        if let Some(previous) = pending.remove(user_id) {
            previous.abort();
        }

        let pending_map = Arc::clone(&self.pending);
        let owner = user_id.to_string();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(FLUSH_DELAY).await;
            if let Err(err) = store.flush().await {
                warn!("debounced flush for {owner} failed: {}", err.message);
            }
            pending_map.lock().await.remove(&owner);
        });
        pending.insert(user_id.to_string(), handle.abort_handle());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{load_book, Store};

    fn scratch_path(tag: &str) -> std::path::PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("hard75_{tag}_{}.json", std::process::id()));
        path
    }

    #[tokio::test]
    async fn rescheduling_coalesces_into_one_write() {
        let path = scratch_path("debounce");
        let _ = tokio::fs::remove_file(&path).await;
        let store = Store::with_file(path.clone(), Default::default());
        store
            .update("u1", |ledger| {
                ledger.today.steps = 100;
                Ok(())
            })
            .await
            .unwrap();

        let flusher = Flusher::new();
        flusher.schedule("u1", store.clone()).await;
        tokio::time::sleep(Duration::from_millis(100)).await;

        // A second update within the window cancels the first write.
        store
            .update("u1", |ledger| {
                ledger.today.steps = 250;
                Ok(())
            })
            .await
            .unwrap();
        flusher.schedule("u1", store.clone()).await;
        assert!(
            !tokio::fs::try_exists(&path).await.unwrap(),
            "write fired before the window elapsed"
        );

        tokio::time::sleep(FLUSH_DELAY + Duration::from_millis(300)).await;
        let book = load_book(&path).await;
        assert_eq!(book.get("u1").unwrap().today.steps, 250);
        let _ = tokio::fs::remove_file(&path).await;
    }
}
