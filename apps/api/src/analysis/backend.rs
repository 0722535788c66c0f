//! Analysis backends: pluggable, trait-based producers of structured analysis.
//!
//! Default primary: `LlmAnalyzer` (chat completion + strict schema decode).
//! The heuristic path is not a backend: it is total and lives in `heuristics`.
//!
//! `AnalysisService` holds an `Option<Arc<dyn AnalysisBackend>>`, set at startup
//! from config.

use async_trait::async_trait;

use crate::analysis::models::{GeneratedContent, JobAnalysis};
use crate::analysis::prompts::{
    system_prompt, user_prompt, ANALYZE_JD_SYSTEM, GENERATE_CONTENT_SYSTEM,
};
use crate::llm_client::{LlmClient, LlmError};

/// A fallible analysis source. Implement this to swap backends without touching
/// the orchestrator or handlers.
#[async_trait]
pub trait AnalysisBackend: Send + Sync {
    /// Short label used in logs and the `x-analysis-source` header.
    fn name(&self) -> &'static str;

    async fn analyze_job(
        &self,
        job_description: &str,
        candidate_profile: &str,
    ) -> Result<JobAnalysis, LlmError>;

    async fn generate_content(
        &self,
        job_description: &str,
        candidate_profile: &str,
    ) -> Result<GeneratedContent, LlmError>;
}

/// LLM-backed analysis. Every response goes through parse-and-validate before
/// it is accepted.
pub struct LlmAnalyzer(pub LlmClient);

#[async_trait]
impl AnalysisBackend for LlmAnalyzer {
    fn name(&self) -> &'static str {
        "llm"
    }

    async fn analyze_job(
        &self,
        job_description: &str,
        candidate_profile: &str,
    ) -> Result<JobAnalysis, LlmError> {
        let analysis: JobAnalysis = self
            .0
            .call_json(
                &system_prompt(ANALYZE_JD_SYSTEM),
                &user_prompt(job_description, candidate_profile),
            )
            .await?;
        validate_job_analysis(analysis)
    }

    async fn generate_content(
        &self,
        job_description: &str,
        candidate_profile: &str,
    ) -> Result<GeneratedContent, LlmError> {
        self.0
            .call_json(
                &system_prompt(GENERATE_CONTENT_SYSTEM),
                &user_prompt(job_description, candidate_profile),
            )
            .await
    }
}

/// Range checks that serde's type checks cannot express.
pub fn validate_job_analysis(analysis: JobAnalysis) -> Result<JobAnalysis, LlmError> {
    if analysis.fit_score > 100 {
        return Err(LlmError::Schema(format!(
            "fit_score {} is outside 0..=100",
            analysis.fit_score
        )));
    }
    Ok(analysis)
}
