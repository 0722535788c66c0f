//! Heuristic analyzer, the rule-based path that always produces a result.
//!
//! Composes the extraction utilities into a `JobAnalysis` and fills fixed
//! templates for `GeneratedContent`. Used whenever the LLM path is disabled or
//! returns nothing usable.

use crate::analysis::extract::{
    extract_bullets, extract_candidate_skills, extract_line_value, extract_salary,
    extract_skills, summarize_text,
};
use crate::analysis::models::{GeneratedContent, JobAnalysis};

const TITLE_LABELS: &[&str] = &["title", "role", "position"];
const COMPANY_LABELS: &[&str] = &["company", "organization"];
const LOCATION_LABELS: &[&str] = &["location", "based in"];
const EMPLOYMENT_LABELS: &[&str] = &["employment", "type", "job type"];
const RESPONSIBILITY_ANCHORS: &[&str] = &["responsibilities", "what you will do", "role"];

const DEFAULT_TITLE: &str = "Role";
const DEFAULT_COMPANY: &str = "Company";
/// Fit score when the description names no catalog skills at all.
const BASELINE_FIT_SCORE: u32 = 60;
const TOP_SKILLS: usize = 5;
const FALLBACK_SKILLS_PHRASE: &str = "relevant skills";
const FALLBACK_PROFILE_PHRASE: &str = "experienced candidate";

/// Extracts job signals from `job_description` and scores `candidate_profile`
/// against the required skills.
///
/// Total: every field has a deterministic default, so this never fails.
pub fn heuristic_job_analysis(job_description: &str, candidate_profile: &str) -> JobAnalysis {
    let title = extract_line_value(job_description, TITLE_LABELS)
        .unwrap_or_else(|| DEFAULT_TITLE.to_string());
    let company = extract_line_value(job_description, COMPANY_LABELS)
        .unwrap_or_else(|| DEFAULT_COMPANY.to_string());
    let location = extract_line_value(job_description, LOCATION_LABELS);
    let employment_type = extract_line_value(job_description, EMPLOYMENT_LABELS);
    let salary_range = extract_salary(job_description);
    let responsibilities = extract_bullets(job_description, RESPONSIBILITY_ANCHORS);

    // Both lists scan the same text; overlap between them is expected.
    let required_skills = extract_skills(job_description, false);
    let preferred_skills = extract_skills(job_description, true);

    let candidate_tokens = extract_candidate_skills(candidate_profile);
    let (matched, missing_skills): (Vec<String>, Vec<String>) = required_skills
        .iter()
        .cloned()
        .partition(|skill| candidate_tokens.contains(&skill.to_lowercase()));

    let fit_score = compute_fit_score(matched.len(), required_skills.len());
    let match_rationale = build_rationale(matched.len(), required_skills.len());

    JobAnalysis {
        title,
        company,
        location,
        employment_type,
        salary_range,
        summary: Some(summarize_text(job_description)),
        responsibilities,
        required_skills,
        preferred_skills,
        fit_score,
        missing_skills,
        match_rationale: Some(match_rationale),
    }
}

/// Fills the resume, cover letter and talking-point templates with the top
/// skills of the description and the candidate profile.
pub fn heuristic_generate_content(
    job_description: &str,
    candidate_profile: &str,
) -> GeneratedContent {
    let skills = extract_skills(job_description, false);
    let top_skills = if skills.is_empty() {
        FALLBACK_SKILLS_PHRASE.to_string()
    } else {
        skills
            .iter()
            .take(TOP_SKILLS)
            .cloned()
            .collect::<Vec<_>>()
            .join(", ")
    };

    let profile = match candidate_profile.trim() {
        "" => FALLBACK_PROFILE_PHRASE,
        trimmed => trimmed,
    };

    GeneratedContent {
        resume_bullets: vec![
            format!("Delivered impact in {top_skills} aligned with the role requirements."),
            format!("Partnered cross-functionally to drive outcomes using {top_skills}."),
            format!("Improved quality and speed by applying {top_skills} best practices."),
        ],
        cover_letter_paragraphs: vec![
            "I am excited to apply for this role and bring a results-driven approach to your team.".to_string(),
            format!("My background includes {profile}, and I have hands-on experience with {top_skills}."),
            "I would welcome the opportunity to contribute to your goals and discuss how I can help.".to_string(),
        ],
        talking_points: vec![
            format!("Highlight experience with {top_skills} that maps to key responsibilities."),
            "Explain a recent project with measurable impact and clear business outcomes.".to_string(),
            "Discuss how you adapt quickly to new domains and collaborate effectively.".to_string(),
        ],
    }
}

/// `round(matched / required * 100)` with halves going to the even neighbour,
/// or the baseline when nothing is required. Always within 0..=100.
fn compute_fit_score(matched: usize, required: usize) -> u32 {
    if required == 0 {
        return BASELINE_FIT_SCORE;
    }
    let ratio = matched as f64 / required as f64;
    ((ratio * 100.0).round_ties_even() as u32).min(100)
}

fn build_rationale(matched: usize, required: usize) -> String {
    if required == 0 {
        "No explicit required skills found; used a general fit estimate.".to_string()
    } else {
        format!("Matched {matched} of {required} required skills.")
    }
}
