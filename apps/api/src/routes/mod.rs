pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers as analysis;
use crate::applications::handlers as applications;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Analysis API
        .route("/api/analyze_jd", post(analysis::handle_analyze_jd))
        .route(
            "/api/generate_content",
            post(analysis::handle_generate_content),
        )
        // Application tracking
        .route(
            "/api/applications",
            get(applications::handle_list_applications)
                .post(applications::handle_create_application),
        )
        .route(
            "/api/applications/:id",
            get(applications::handle_get_application)
                .patch(applications::handle_update_application),
        )
        .with_state(state)
}
