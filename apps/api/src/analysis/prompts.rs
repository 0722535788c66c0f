// All LLM prompt constants for the Analysis module.
// Reuses the cross-cutting JSON-only fragment from llm_client::prompts.

use crate::llm_client::prompts::JSON_ONLY_SYSTEM;

/// System prompt for job-description analysis. Field names mirror `JobAnalysis`.
pub const ANALYZE_JD_SYSTEM: &str = r#"You are an expert recruiter and career coach.
Analyze the job description and the candidate profile you are given.

Return a JSON object with this EXACT schema:
{
  "title": "string",
  "company": "string",
  "location": "string or null",
  "employment_type": "string or null",
  "salary_range": "string or null",
  "summary": "string or null",
  "responsibilities": ["string"],
  "required_skills": ["string"],
  "preferred_skills": ["string"],
  "fit_score": 0,
  "missing_skills": ["string"],
  "match_rationale": "string or null"
}

Rules:
- fit_score is an integer from 0 to 100 estimating how well the candidate matches.
- missing_skills lists required skills the candidate profile does not show.
- Use "Role" and "Company" when the title or company cannot be determined."#;

/// System prompt for application-assist content. Field names mirror `GeneratedContent`.
pub const GENERATE_CONTENT_SYSTEM: &str = r#"You are an expert resume writer and interview coach.
Write application material tailored to the job description using only facts from the candidate profile.

Return a JSON object with this EXACT schema:
{
  "resume_bullets": ["string", "string", "string"],
  "cover_letter_paragraphs": ["string", "string", "string"],
  "talking_points": ["string", "string", "string"]
}

Rules:
- Provide exactly three entries in each list.
- Do NOT invent employers, titles, or metrics that are not in the profile."#;

/// Full system instruction: task schema followed by the JSON-only rule.
pub fn system_prompt(task: &str) -> String {
    format!("{task}\n\n{JSON_ONLY_SYSTEM}")
}

/// Embeds both texts verbatim in the user message.
pub fn user_prompt(job_description: &str, candidate_profile: &str) -> String {
    format!("JOB DESCRIPTION:\n{job_description}\n\nCANDIDATE PROFILE:\n{candidate_profile}")
}
