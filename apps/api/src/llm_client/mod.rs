/// LLM Client: the single point of entry for chat-completion calls.
///
/// ARCHITECTURAL RULE: No other module may call the model endpoint directly.
/// All LLM interactions MUST go through this module.
///
/// One request per call: no retries. Any failure is reported as an `LlmError`
/// and the caller decides what to fall back to.
use std::sync::OnceLock;
use std::time::Duration;

use regex::Regex;
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::config::Config;

pub mod prompts;

/// Low randomness keeps the structured output stable.
pub const TEMPERATURE: f32 = 0.2;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("LLM returned empty content")]
    EmptyContent,

    #[error("No JSON object found in LLM output")]
    NoJson,

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("LLM output does not match schema: {0}")]
    Schema(String),
}

/// Connection settings for an OpenAI-compatible endpoint.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub timeout: Duration,
}

impl LlmConfig {
    /// Returns `None` when no API key is configured (heuristic-only mode).
    pub fn from_config(config: &Config) -> Option<Self> {
        let api_key = config.openai_api_key.clone()?;
        Some(Self {
            api_key,
            base_url: config.openai_base_url.clone(),
            model: config.openai_model.clone(),
            timeout: config.llm_timeout,
        })
    }
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
pub struct ResponseMessage {
    pub content: Option<String>,
}

impl ChatCompletionResponse {
    /// Text of the first choice, if any.
    pub fn text(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|c| c.message.content.as_deref())
            .filter(|t| !t.trim().is_empty())
    }
}

#[derive(Debug, Deserialize)]
struct OpenAiError {
    error: OpenAiErrorBody,
}

#[derive(Debug, Deserialize)]
struct OpenAiErrorBody {
    message: String,
}

/// Thin wrapper over `POST {base_url}/chat/completions`.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    config: LlmConfig,
}

impl LlmClient {
    pub fn new(config: LlmConfig) -> Result<Self, LlmError> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// Sends one system + user exchange and returns the assistant text.
    pub async fn call(&self, system: &str, user: &str) -> Result<String, LlmError> {
        let url = format!("{}/chat/completions", self.config.base_url);
        let request_body = ChatCompletionRequest {
            model: &self.config.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
            temperature: TEMPERATURE,
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<OpenAiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let completion: ChatCompletionResponse = response.json().await?;
        debug!("LLM call succeeded: model={}", self.config.model);

        completion
            .text()
            .map(String::from)
            .ok_or(LlmError::EmptyContent)
    }

    /// Calls the LLM and decodes the JSON object embedded in its reply as `T`.
    /// The decode is strict: missing or mistyped fields are a `Schema` error.
    pub async fn call_json<T: DeserializeOwned>(
        &self,
        system: &str,
        user: &str,
    ) -> Result<T, LlmError> {
        let text = self.call(system, user).await?;
        let value = extract_json(&text)?;
        serde_json::from_value(value).map_err(|e| LlmError::Schema(e.to_string()))
    }
}

fn fenced_json_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)```json\s*(\{.*?\})\s*```").expect("valid regex"))
}

fn bare_object_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)\{.*\}").expect("valid regex"))
}

/// Pulls a JSON object out of free-form model output.
///
/// A ```json fenced block wins; otherwise the span from the first `{` to the last
/// `}` is used, so nested objects come along whole.
pub fn extract_json(text: &str) -> Result<serde_json::Value, LlmError> {
    let candidate = fenced_json_regex()
        .captures(text)
        .and_then(|caps| caps.get(1))
        .or_else(|| bare_object_regex().find(text))
        .ok_or(LlmError::NoJson)?;

    Ok(serde_json::from_str(candidate.as_str())?)
}
