//! Analysis orchestration. Tries the configured backend first and falls back
//! to the heuristic analyzer on any failure.
//!
//! Exactly one path produces each result. A backend result is returned as-is;
//! the heuristics are never blended in.

use std::sync::Arc;

use tracing::info;

use crate::analysis::backend::AnalysisBackend;
use crate::analysis::heuristics::{heuristic_generate_content, heuristic_job_analysis};
use crate::analysis::models::{GeneratedContent, JobAnalysis};

/// Which path produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisSource {
    Llm,
    Heuristic,
}

impl AnalysisSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisSource::Llm => "llm",
            AnalysisSource::Heuristic => "heuristic",
        }
    }
}

/// A result tagged with the path that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Analyzed<T> {
    pub value: T,
    pub source: AnalysisSource,
}

/// Carried in `AppState` behind an `Arc`.
#[derive(Clone)]
pub struct AnalysisService {
    primary: Option<Arc<dyn AnalysisBackend>>,
}

impl AnalysisService {
    pub fn new(primary: Option<Arc<dyn AnalysisBackend>>) -> Self {
        Self { primary }
    }

    /// No backend configured: every request is answered by the heuristics.
    pub fn heuristic_only() -> Self {
        Self { primary: None }
    }

    pub async fn analyze_job(
        &self,
        job_description: &str,
        candidate_profile: &str,
    ) -> Analyzed<JobAnalysis> {
        if let Some(backend) = &self.primary {
            if let Ok(value) = backend.analyze_job(job_description, candidate_profile).await {
                info!(backend = backend.name(), "Job analysis produced by backend");
                return Analyzed {
                    value,
                    source: AnalysisSource::Llm,
                };
            }
            info!("Backend unavailable for job analysis, using heuristics");
        }

        Analyzed {
            value: heuristic_job_analysis(job_description, candidate_profile),
            source: AnalysisSource::Heuristic,
        }
    }

    pub async fn generate_content(
        &self,
        job_description: &str,
        candidate_profile: &str,
    ) -> Analyzed<GeneratedContent> {
        if let Some(backend) = &self.primary {
            if let Ok(value) = backend
                .generate_content(job_description, candidate_profile)
                .await
            {
                info!(backend = backend.name(), "Content produced by backend");
                return Analyzed {
                    value,
                    source: AnalysisSource::Llm,
                };
            }
            info!("Backend unavailable for content generation, using heuristics");
        }

        Analyzed {
            value: heuristic_generate_content(job_description, candidate_profile),
            source: AnalysisSource::Heuristic,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use super::*;
    use crate::llm_client::LlmError;

    const JD: &str = "Title: Platform Engineer\nCompany: Acme Corp\nSkills: Python, SQL, React";
    const PROFILE: &str = "I know python and react";

    /// Backend that returns fixed values or a fixed failure and counts calls.
    struct StubBackend {
        fail: bool,
        calls: AtomicUsize,
    }

    impl StubBackend {
        fn new(fail: bool) -> Self {
            Self {
                fail,
                calls: AtomicUsize::new(0),
            }
        }
    }

    fn llm_analysis() -> JobAnalysis {
        JobAnalysis {
            title: "Staff Platform Engineer".to_string(),
            company: "Acme".to_string(),
            location: None,
            employment_type: None,
            salary_range: None,
            summary: None,
            responsibilities: vec![],
            required_skills: vec!["Kotlin".to_string()],
            preferred_skills: vec![],
            fit_score: 12,
            missing_skills: vec!["Kotlin".to_string()],
            match_rationale: Some("from the model".to_string()),
        }
    }

    fn llm_content() -> GeneratedContent {
        GeneratedContent {
            resume_bullets: vec!["model bullet".to_string()],
            cover_letter_paragraphs: vec![],
            talking_points: vec![],
        }
    }

    #[async_trait]
    impl AnalysisBackend for StubBackend {
        fn name(&self) -> &'static str {
            "stub"
        }

        async fn analyze_job(&self, _: &str, _: &str) -> Result<JobAnalysis, LlmError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err(LlmError::NoJson)
            } else {
                Ok(llm_analysis())
            }
        }

        async fn generate_content(&self, _: &str, _: &str) -> Result<GeneratedContent, LlmError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err(LlmError::Schema("missing field `talking_points`".to_string()))
            } else {
                Ok(llm_content())
            }
        }
    }

    #[tokio::test]
    async fn test_backend_result_returned_unchanged() {
        let service = AnalysisService::new(Some(Arc::new(StubBackend::new(false))));

        let analysis = service.analyze_job(JD, PROFILE).await;
        assert_eq!(analysis.source, AnalysisSource::Llm);
        assert_eq!(analysis.value, llm_analysis());

        let content = service.generate_content(JD, PROFILE).await;
        assert_eq!(content.source, AnalysisSource::Llm);
        assert_eq!(content.value, llm_content());
    }

    #[tokio::test]
    async fn test_backend_failure_falls_back_to_heuristics() {
        let backend = Arc::new(StubBackend::new(true));
        let service = AnalysisService::new(Some(backend.clone()));

        let analysis = service.analyze_job(JD, PROFILE).await;
        assert_eq!(analysis.source, AnalysisSource::Heuristic);
        assert_eq!(analysis.value, heuristic_job_analysis(JD, PROFILE));
        assert_eq!(analysis.value.fit_score, 67);

        let content = service.generate_content(JD, PROFILE).await;
        assert_eq!(content.source, AnalysisSource::Heuristic);
        assert_eq!(content.value, heuristic_generate_content(JD, PROFILE));

        // One attempt per request, no retries.
        assert_eq!(backend.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_heuristic_only_skips_backend() {
        let service = AnalysisService::heuristic_only();

        let analysis = service.analyze_job(JD, PROFILE).await;
        assert_eq!(analysis.source, AnalysisSource::Heuristic);
        assert_eq!(analysis.value, heuristic_job_analysis(JD, PROFILE));
    }

    #[test]
    fn test_source_labels() {
        assert_eq!(AnalysisSource::Llm.as_str(), "llm");
        assert_eq!(AnalysisSource::Heuristic.as_str(), "heuristic");
    }
}
