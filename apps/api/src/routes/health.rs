use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns a simple status object with service version and analysis mode.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    let analysis_mode = if state.config.llm_enabled() {
        "llm_with_fallback"
    } else {
        "heuristic_only"
    };
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "job-copilot-api",
        "analysis_mode": analysis_mode
    }))
}
