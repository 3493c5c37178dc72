use crate::errors::AppError;
use crate::models::UserLedger;
use std::collections::BTreeMap;
use std::{env, path::Path, path::PathBuf, sync::Arc};
use tokio::fs;
use tokio::sync::Mutex;
use tracing::error;

/// All ledgers, keyed by the opaque user id the identity provider supplies.
pub type LedgerBook = BTreeMap<String, UserLedger>;

/// Authoritative in-memory book with optional JSON-file durability.
///
/// Mutations always land in memory first; the file write can fail
/// independently and never un-applies an in-memory change. With no path the
/// store is the pure in-memory variant used by tests and mock deployments.
#[derive(Clone)]
pub struct Store {
    path: Option<PathBuf>,
    book: Arc<Mutex<LedgerBook>>,
}

impl Store {
    pub fn in_memory() -> Self {
        Self {
            path: None,
            book: Arc::new(Mutex::new(LedgerBook::new())),
        }
    }

    pub fn with_file(path: PathBuf, book: LedgerBook) -> Self {
        Self {
            path: Some(path),
            book: Arc::new(Mutex::new(book)),
        }
    }

    /// Loads a user's ledger, initializing defaults on first sight.
    pub async fn load(&self, user_id: &str) -> UserLedger {
        let mut book = self.book.lock().await;
        book.entry(user_id.to_string()).or_default().clone()
    }

    /// Applies `mutate` to the user's ledger in memory and returns the result
    /// along with the updated ledger. If the closure errors the stored ledger
    /// is left exactly as it was.
    pub async fn update<T>(
        &self,
        user_id: &str,
        mutate: impl FnOnce(&mut UserLedger) -> Result<T, AppError>,
    ) -> Result<(T, UserLedger), AppError> {
        let mut book = self.book.lock().await;
        let ledger = book.entry(user_id.to_string()).or_default();
        let mut working = ledger.clone();
        let outcome = mutate(&mut working)?;
        *ledger = working.clone();
        Ok((outcome, working))
    }

    /// Writes the whole book to disk. A no-op for the in-memory variant.
    pub async fn flush(&self) -> Result<(), AppError> {
        let Some(path) = self.path.as_deref() else {
            return Ok(());
        };
        let payload = {
            let book = self.book.lock().await;
            serde_json::to_vec_pretty(&*book).map_err(AppError::internal)?
        };
        fs::write(path, payload).await.map_err(AppError::internal)?;
        Ok(())
    }
}

pub fn resolve_data_path() -> Result<PathBuf, std::io::Error> {
    if let Ok(path) = env::var("APP_DATA_PATH") {
        return Ok(PathBuf::from(path));
    }

    Ok(PathBuf::from("data/ledgers.json"))
}

/// True when `APP_STORE=memory` selects the mock in-memory variant.
pub fn memory_store_selected() -> bool {
    env::var("APP_STORE").is_ok_and(|value| value.eq_ignore_ascii_case("memory"))
}

pub async fn load_book(path: &Path) -> LedgerBook {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(book) => book,
            Err(err) => {
                error!("failed to parse ledger file: {err}");
                LedgerBook::new()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => LedgerBook::new(),
        Err(err) => {
            error!("failed to read ledger file: {err}");
            LedgerBook::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger;

    #[tokio::test]
    async fn unknown_user_gets_a_default_ledger() {
        let store = Store::in_memory();
        let ledger = store.load("someone-new").await;
        assert_eq!(ledger, UserLedger::default());
    }

    #[tokio::test]
    async fn failed_mutation_leaves_the_ledger_untouched() {
        let store = Store::in_memory();
        let result = store
            .update("u1", |ledger| ledger::toggle_task(ledger, "notAKey"))
            .await;
        assert!(result.is_err());
        assert_eq!(store.load("u1").await, UserLedger::default());
    }

    #[tokio::test]
    async fn users_are_isolated() {
        let store = Store::in_memory();
        store
            .update("u1", |ledger| ledger::toggle_task(ledger, "walk8k"))
            .await
            .unwrap();
        assert!(store.load("u1").await.today.task_set.walk_8k);
        assert!(!store.load("u2").await.today.task_set.walk_8k);
    }
}
