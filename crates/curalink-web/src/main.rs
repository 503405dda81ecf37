//! CuraLink backend server.
//!
//! Run with: cargo run -p curalink-web
//!
//! Environment:
//!   CURALINK_PORT  — listen port (default 8000)
//!   PUBMED_API_KEY — optional NCBI E-utilities api key

use std::net::SocketAddr;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use curalink_store::{DocumentStore, MemoryStore};
use curalink_web::{router, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Starting CuraLink backend...");

    // The store handle is owned here and injected everywhere else; swapping
    // in an external document store is a change to this line only.
    let store: Arc<dyn DocumentStore> = Arc::new(MemoryStore::new());

    let state = AppState::new(store, std::env::var("PUBMED_API_KEY").ok())?;
    let app = router::build_router(state);

    let port = std::env::var("CURALINK_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8000);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
