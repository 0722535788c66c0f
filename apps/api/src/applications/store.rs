use chrono::Utc;
use sqlx::SqlitePool;
use tracing::info;

use crate::models::application::{ApplicationRow, Stage};

/// Validated fields for a new application.
#[derive(Debug, Clone)]
pub struct NewApplication {
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub url: Option<String>,
    pub stage: Stage,
    pub notes: Option<String>,
}

/// Validated partial update. `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default)]
pub struct ApplicationPatch {
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub url: Option<String>,
    pub stage: Option<Stage>,
    pub notes: Option<String>,
}

/// All applications, most recently touched first.
pub async fn list_applications(pool: &SqlitePool) -> sqlx::Result<Vec<ApplicationRow>> {
    sqlx::query_as::<_, ApplicationRow>(
        "SELECT * FROM applications ORDER BY updated_at DESC, id DESC",
    )
    .fetch_all(pool)
    .await
}

pub async fn get_application(pool: &SqlitePool, id: i64) -> sqlx::Result<Option<ApplicationRow>> {
    sqlx::query_as::<_, ApplicationRow>("SELECT * FROM applications WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn create_application(
    pool: &SqlitePool,
    new: NewApplication,
) -> sqlx::Result<ApplicationRow> {
    let now = Utc::now();
    let row = sqlx::query_as::<_, ApplicationRow>(
        r#"
        INSERT INTO applications
            (title, company, location, url, stage, notes, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        RETURNING *
        "#,
    )
    .bind(&new.title)
    .bind(&new.company)
    .bind(&new.location)
    .bind(&new.url)
    .bind(new.stage.as_str())
    .bind(&new.notes)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await?;

    info!("Created application {} ({} at {})", row.id, row.title, row.company);
    Ok(row)
}

/// Applies `patch` and refreshes `updated_at`. Returns `None` if `id` does not exist.
pub async fn update_application(
    pool: &SqlitePool,
    id: i64,
    patch: ApplicationPatch,
) -> sqlx::Result<Option<ApplicationRow>> {
    let row = sqlx::query_as::<_, ApplicationRow>(
        r#"
        UPDATE applications SET
            title      = COALESCE(?, title),
            company    = COALESCE(?, company),
            location   = COALESCE(?, location),
            url        = COALESCE(?, url),
            stage      = COALESCE(?, stage),
            notes      = COALESCE(?, notes),
            updated_at = ?
        WHERE id = ?
        RETURNING *
        "#,
    )
    .bind(&patch.title)
    .bind(&patch.company)
    .bind(&patch.location)
    .bind(&patch.url)
    .bind(patch.stage.map(|s| s.as_str()))
    .bind(&patch.notes)
    .bind(Utc::now())
    .bind(id)
    .fetch_optional(pool)
    .await?;

    if let Some(row) = &row {
        info!("Updated application {} (stage {})", row.id, row.stage);
    }
    Ok(row)
}
