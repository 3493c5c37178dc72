pub mod app;
pub mod auth;
pub mod debounce;
pub mod errors;
pub mod handlers;
pub mod ledger;
pub mod models;
pub mod state;
pub mod stats;
pub mod storage;
pub mod ui;

pub use app::router;
pub use state::AppState;
pub use storage::{load_book, memory_store_selected, resolve_data_path, Store};
