use std::str::FromStr;

use anyhow::{Context, Result};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use tracing::info;

const CREATE_APPLICATIONS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS applications (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    title       TEXT NOT NULL,
    company     TEXT NOT NULL,
    location    TEXT,
    url         TEXT,
    stage       TEXT NOT NULL DEFAULT 'Interested',
    notes       TEXT,
    created_at  TEXT NOT NULL,
    updated_at  TEXT NOT NULL
)
"#;

/// Creates a SQLite connection pool and makes sure the schema exists.
///
/// In-memory databases are private to each connection, so they get a pool of one.
pub async fn create_pool(database_url: &str) -> Result<SqlitePool> {
    info!("Connecting to SQLite...");

    let options = SqliteConnectOptions::from_str(database_url)
        .with_context(|| format!("Invalid DATABASE_URL '{database_url}'"))?
        .create_if_missing(true);

    let max_connections = if database_url.contains(":memory:") { 1 } else { 5 };

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;

    sqlx::query(CREATE_APPLICATIONS_TABLE)
        .execute(&pool)
        .await
        .context("Failed to create applications table")?;

    info!("SQLite connection pool established ({max_connections} connections)");
    Ok(pool)
}
