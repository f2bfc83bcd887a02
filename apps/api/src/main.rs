mod composer;
mod config;
mod errors;
mod llm_client;
mod models;
mod refine;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::refine::LlmRefiner;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first so the log level is known
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting promptgen v{}", env!("CARGO_PKG_VERSION"));

    if config.hf_token.is_empty() {
        warn!("HF_TOKEN not set; prompt refinement will fail until it is configured");
    }

    // Initialize LLM client for the refinement pass
    let llm = LlmClient::new(
        config.llm_base_url.clone(),
        config.hf_token.clone(),
        config.hf_model.clone(),
    )?;
    info!(
        "LLM client initialized (model: {}, base_url: {})",
        llm.model(),
        config.llm_base_url
    );

    let state = AppState {
        refiner: Arc::new(LlmRefiner::new(llm)),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
