use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::applications::store::{
    create_application, get_application, list_applications, update_application,
    ApplicationPatch, NewApplication,
};
use crate::errors::AppError;
use crate::models::application::{ApplicationRow, Stage};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateApplicationRequest {
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub url: Option<String>,
    pub stage: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateApplicationRequest {
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub url: Option<String>,
    pub stage: Option<String>,
    pub notes: Option<String>,
}

impl CreateApplicationRequest {
    fn validate(self) -> Result<NewApplication, AppError> {
        Ok(NewApplication {
            title: require_text("title", self.title)?,
            company: require_text("company", self.company)?,
            location: self.location,
            url: self.url,
            stage: self.stage.as_deref().map(parse_stage).transpose()?.unwrap_or_default(),
            notes: self.notes,
        })
    }
}

impl UpdateApplicationRequest {
    fn validate(self) -> Result<ApplicationPatch, AppError> {
        Ok(ApplicationPatch {
            title: self.title.map(|t| require_text("title", t)).transpose()?,
            company: self.company.map(|c| require_text("company", c)).transpose()?,
            location: self.location,
            url: self.url,
            stage: self.stage.as_deref().map(parse_stage).transpose()?,
            notes: self.notes,
        })
    }
}

fn require_text(field: &str, value: String) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::Validation(format!("{field} cannot be empty")));
    }
    Ok(trimmed.to_string())
}

fn parse_stage(raw: &str) -> Result<Stage, AppError> {
    raw.parse::<Stage>()
        .map_err(|e| AppError::Validation(e.to_string()))
}

/// GET /api/applications
pub async fn handle_list_applications(
    State(state): State<AppState>,
) -> Result<Json<Vec<ApplicationRow>>, AppError> {
    Ok(Json(list_applications(&state.db).await?))
}

/// POST /api/applications
pub async fn handle_create_application(
    State(state): State<AppState>,
    Json(req): Json<CreateApplicationRequest>,
) -> Result<(StatusCode, Json<ApplicationRow>), AppError> {
    let new = req.validate()?;
    let row = create_application(&state.db, new).await?;
    Ok((StatusCode::CREATED, Json(row)))
}

/// GET /api/applications/:id
pub async fn handle_get_application(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApplicationRow>, AppError> {
    get_application(&state.db, id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Application {id} not found")))
}

/// PATCH /api/applications/:id
pub async fn handle_update_application(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateApplicationRequest>,
) -> Result<Json<ApplicationRow>, AppError> {
    let patch = req.validate()?;
    update_application(&state.db, id, patch)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Application {id} not found")))
}
