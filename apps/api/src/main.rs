mod analysis;
mod applications;
mod config;
mod db;
mod errors;
mod llm_client;
mod models;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::http::HeaderValue;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::backend::{AnalysisBackend, LlmAnalyzer};
use crate::analysis::orchestrator::AnalysisService;
use crate::config::Config;
use crate::db::create_pool;
use crate::llm_client::{LlmClient, LlmConfig};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Job Copilot API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize SQLite
    let db = create_pool(&config.database_url).await?;

    // Initialize analysis (LLM first when a key is configured, heuristics otherwise)
    let analysis = build_analysis_service(&config)?;

    let state = AppState {
        db,
        config: config.clone(),
        analysis: Arc::new(analysis),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(build_cors(&config)?);

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn build_analysis_service(config: &Config) -> Result<AnalysisService> {
    let Some(llm_config) = LlmConfig::from_config(config) else {
        info!("OPENAI_API_KEY not set; analysis runs in heuristic-only mode");
        return Ok(AnalysisService::heuristic_only());
    };

    let llm = LlmClient::new(llm_config).context("Failed to build LLM HTTP client")?;
    info!(
        "LLM client initialized (model: {}, base url: {})",
        llm.model(),
        config.openai_base_url
    );
    let backend: Arc<dyn AnalysisBackend> = Arc::new(LlmAnalyzer(llm));
    Ok(AnalysisService::new(Some(backend)))
}

/// Permissive unless ALLOWED_ORIGINS names specific origins.
fn build_cors(config: &Config) -> Result<CorsLayer> {
    if config.allowed_origins.is_empty() {
        warn!("ALLOWED_ORIGINS not set; CORS is permissive");
        return Ok(CorsLayer::permissive());
    }

    let origins = config
        .allowed_origins
        .iter()
        .map(|o| {
            HeaderValue::from_str(o).with_context(|| format!("Invalid CORS origin '{o}'"))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CorsLayer::permissive().allow_origin(origins))
}
