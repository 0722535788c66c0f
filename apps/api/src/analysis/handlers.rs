//! Axum route handlers for the Analysis API.

use axum::{
    extract::State,
    http::{HeaderName, HeaderValue},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::analysis::models::{AnalyzeRequest, GeneratedContent, JobAnalysis};
use crate::analysis::orchestrator::Analyzed;
use crate::errors::AppError;
use crate::state::AppState;

pub const ANALYSIS_SOURCE_HEADER: &str = "x-analysis-source";

/// POST /api/analyze_jd
///
/// Extracts title, company, skills and a fit score from a job description.
/// Never fails once the description is non-blank.
pub async fn handle_analyze_jd(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Response, AppError> {
    validate_job_description(&request)?;

    let analyzed: Analyzed<JobAnalysis> = state
        .analysis
        .analyze_job(&request.job_description, request.profile())
        .await;

    Ok(with_source(analyzed))
}

/// POST /api/generate_content
///
/// Resume bullets, cover-letter paragraphs and talking points for a job description.
pub async fn handle_generate_content(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Response, AppError> {
    validate_job_description(&request)?;

    let analyzed: Analyzed<GeneratedContent> = state
        .analysis
        .generate_content(&request.job_description, request.profile())
        .await;

    Ok(with_source(analyzed))
}

fn validate_job_description(request: &AnalyzeRequest) -> Result<(), AppError> {
    if request.job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "job_description cannot be empty".to_string(),
        ));
    }
    Ok(())
}

/// JSON body is the analyzed value itself; the producing path goes in a header.
fn with_source<T: Serialize>(analyzed: Analyzed<T>) -> Response {
    (
        [(
            HeaderName::from_static(ANALYSIS_SOURCE_HEADER),
            HeaderValue::from_static(analyzed.source.as_str()),
        )],
        Json(analyzed.value),
    )
        .into_response()
}
