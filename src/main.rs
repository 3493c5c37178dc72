use hard75::{load_book, memory_store_selected, resolve_data_path, router, AppState, Store};
use std::{env, net::SocketAddr};
use tokio::fs;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let store = if memory_store_selected() {
        info!("using in-memory ledger store");
        Store::in_memory()
    } else {
        let data_path = resolve_data_path()?;
        if let Some(parent) = data_path.parent() {
            fs::create_dir_all(parent).await?;
        }
        let book = load_book(&data_path).await;
        Store::with_file(data_path, book)
    };

    let app = router(AppState::new(store));

    let port = env::var("PORT")
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(8080);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
