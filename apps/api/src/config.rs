use std::time::Duration;

use anyhow::{Context, Result};

const DEFAULT_DATABASE_URL: &str = "sqlite://job_copilot.db";
const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";
const DEFAULT_LLM_TIMEOUT_SECS: u64 = 30;

/// Application configuration loaded from environment variables.
/// Everything has a default except the OpenAI key, whose absence switches the
/// analysis endpoints into heuristic-only mode.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub openai_api_key: Option<String>,
    pub openai_base_url: String,
    pub openai_model: String,
    pub llm_timeout: Duration,
    /// Empty means permissive CORS.
    pub allowed_origins: Vec<String>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let llm_timeout_secs = match optional_env("OPENAI_TIMEOUT_SECS") {
            Some(raw) => raw
                .parse::<u64>()
                .context("OPENAI_TIMEOUT_SECS must be a whole number of seconds")?,
            None => DEFAULT_LLM_TIMEOUT_SECS,
        };

        Ok(Config {
            database_url: optional_env("DATABASE_URL")
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            openai_api_key: optional_env("OPENAI_API_KEY"),
            openai_base_url: optional_env("OPENAI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_OPENAI_BASE_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            openai_model: optional_env("OPENAI_MODEL")
                .unwrap_or_else(|| DEFAULT_OPENAI_MODEL.to_string()),
            llm_timeout: Duration::from_secs(llm_timeout_secs),
            allowed_origins: optional_env("ALLOWED_ORIGINS")
                .map(|raw| parse_origins(&raw))
                .unwrap_or_default(),
            port: optional_env("PORT")
                .unwrap_or_else(|| "8000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    /// True when an API credential is present and the LLM path should be tried.
    pub fn llm_enabled(&self) -> bool {
        self.openai_api_key.is_some()
    }
}

/// Reads an env var, treating unset and whitespace-only values alike.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
impl Config {
    /// Heuristic-only config backed by an in-memory database.
    pub fn for_tests() -> Self {
        Config {
            database_url: "sqlite::memory:".to_string(),
            openai_api_key: None,
            openai_base_url: DEFAULT_OPENAI_BASE_URL.to_string(),
            openai_model: DEFAULT_OPENAI_MODEL.to_string(),
            llm_timeout: Duration::from_secs(DEFAULT_LLM_TIMEOUT_SECS),
            allowed_origins: Vec::new(),
            port: 0,
            rust_log: "debug".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_origins_trims_and_drops_empty() {
        let origins = parse_origins(" http://localhost:3000 , ,https://app.example.com");
        assert_eq!(
            origins,
            vec!["http://localhost:3000", "https://app.example.com"]
        );
    }

    #[test]
    fn test_llm_enabled_follows_api_key() {
        let mut config = Config::for_tests();
        assert!(!config.llm_enabled());
        config.openai_api_key = Some("sk-test".to_string());
        assert!(config.llm_enabled());
    }
}
