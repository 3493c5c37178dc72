use crate::debounce::Flusher;
use crate::storage::Store;

#[derive(Clone)]
pub struct AppState {
    pub store: Store,
    pub flusher: Flusher,
}

impl AppState {
    pub fn new(store: Store) -> Self {
        Self {
            store,
            flusher: Flusher::new(),
        }
    }
}
