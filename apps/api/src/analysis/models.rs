use serde::{Deserialize, Serialize};

/// Structured signals extracted from a job description, plus a fit estimate
/// against the candidate profile.
///
/// This is also the strict decode target for LLM output: every non-`Option`
/// field must be present with the right type or the response is rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobAnalysis {
    pub title: String,
    pub company: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub employment_type: Option<String>,
    #[serde(default)]
    pub salary_range: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    pub responsibilities: Vec<String>,
    pub required_skills: Vec<String>,
    pub preferred_skills: Vec<String>,
    /// 0 – 100
    pub fit_score: u32,
    pub missing_skills: Vec<String>,
    #[serde(default)]
    pub match_rationale: Option<String>,
}

/// Application-assist copy tailored to one job description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedContent {
    pub resume_bullets: Vec<String>,
    pub cover_letter_paragraphs: Vec<String>,
    pub talking_points: Vec<String>,
}

/// Request body shared by both analysis endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeRequest {
    pub job_description: String,
    #[serde(default)]
    pub candidate_profile: Option<String>,
}

impl AnalyzeRequest {
    pub fn profile(&self) -> &str {
        self.candidate_profile.as_deref().unwrap_or("")
    }
}
