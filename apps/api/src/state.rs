use std::sync::Arc;

use sqlx::SqlitePool;

use crate::analysis::orchestrator::AnalysisService;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub config: Config,
    /// LLM-first analysis with heuristic fallback. Heuristic-only when no API key is set.
    pub analysis: Arc<AnalysisService>,
}
