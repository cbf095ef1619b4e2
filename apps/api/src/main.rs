mod assistant;
mod catalog;
mod config;
mod errors;
mod journal;
mod llm_client;
mod matching;
mod models;
mod plan;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::{Inference, LlmClient};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (panics on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("ikigai_api={}", &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Ikigai API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize LLM client — the one Inference implementation in production
    let llm = LlmClient::new(
        config.anthropic_api_key.clone(),
        config.anthropic_base_url.clone(),
        config.llm_timeout_secs,
    );
    info!(
        "LLM client initialized (model: {}, timeout: {}s)",
        llm_client::MODEL,
        config.llm_timeout_secs
    );
    let inference: Arc<dyn Inference> = Arc::new(llm);

    // Build app state (catalog is static, compiled in)
    let state = AppState::new(inference, config.clone());
    info!("Career catalog loaded ({} careers)", state.catalog.len());

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
