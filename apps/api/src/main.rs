mod analysis;
mod config;
mod errors;
mod jobs;
mod llm_client;
mod models;
mod routes;
mod state;
mod store;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{Config, StoreBackend};
use crate::jobs::service::JobService;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::{JsonFileStore, MemoryStore, RecordStore};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Jobtrack API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize the record store
    let store: Arc<dyn RecordStore> = match config.store_backend {
        StoreBackend::File => {
            let store = JsonFileStore::new(&config.data_file);
            // Creates the document up front and surfaces a corrupt file at startup.
            let existing = store.load().await?;
            info!(
                "Job store ready at {} ({} records)",
                store.path().display(),
                existing.len()
            );
            Arc::new(store)
        }
        StoreBackend::Memory => {
            warn!("Using in-memory job store; records are lost on restart");
            Arc::new(MemoryStore::new())
        }
    };

    // Initialize LLM client
    if config.gemini_api_key.is_empty() {
        warn!("GEMINI_API_KEY is not set; /api/analyze-job will fail");
    }
    let llm = LlmClient::new(config.gemini_api_key.clone())?;
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    // Build app state
    let state = AppState {
        jobs: Arc::new(JobService::new(store)),
        analyzer: Arc::new(llm),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
