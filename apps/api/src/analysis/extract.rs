//! Text extraction utilities: pure functions that pull labeled fields, bullet
//! lists, salary ranges, and known skills out of free-text job descriptions.
//!
//! Everything here is stateless and total: a miss yields `None` or an empty list,
//! never an error.

use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

use regex::{Regex, RegexBuilder};

/// Recognized skills, in the order they are reported.
/// Matching is a case-insensitive substring test against the raw text.
pub const SKILL_CATALOG: [&str; 27] = [
    "Python",
    "FastAPI",
    "SQL",
    "SQLAlchemy",
    "PostgreSQL",
    "SQLite",
    "React",
    "TypeScript",
    "JavaScript",
    "Next.js",
    "Node.js",
    "AWS",
    "GCP",
    "Azure",
    "Docker",
    "Kubernetes",
    "CI/CD",
    "LLM",
    "NLP",
    "REST",
    "GraphQL",
    "Tailwind",
    "Chakra",
    "MUI",
    "Figma",
    "Product",
    "Analytics",
];

const MAX_REQUIRED_SKILLS: usize = 10;
const MAX_PREFERRED_SKILLS: usize = 6;
const MAX_BULLETS: usize = 6;
const MAX_FALLBACK_LINES: usize = 5;
const ANCHOR_WINDOW_CHARS: usize = 400;
const SUMMARY_LINES: usize = 3;

const BULLET_MARKERS: [char; 2] = ['-', '•'];

/// Labels the heuristic analyzer looks for; their patterns are compiled once.
const KNOWN_LABELS: &[&str] = &[
    "title",
    "role",
    "position",
    "company",
    "organization",
    "location",
    "based in",
    "employment",
    "type",
    "job type",
];

fn salary_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\$\s?\d{2,3}[,\d]*[kK]?\s?(?:-|to)\s?\$?\s?\d{2,3}[,\d]*[kK]?")
            .expect("valid regex")
    })
}

fn candidate_token_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[a-z+#.]+").expect("valid regex"))
}

fn build_label_regex(label: &str) -> Option<Regex> {
    let pattern = format!(r"^[ \t]*{}[ \t]*[:|\-][ \t]*(.+)$", regex::escape(label));
    RegexBuilder::new(&pattern)
        .case_insensitive(true)
        .multi_line(true)
        .build()
        .ok()
}

/// Patterns for `KNOWN_LABELS`, compiled once.
fn known_label_regexes() -> &'static HashMap<&'static str, Regex> {
    static RES: OnceLock<HashMap<&'static str, Regex>> = OnceLock::new();
    RES.get_or_init(|| {
        KNOWN_LABELS
            .iter()
            .filter_map(|&label| build_label_regex(label).map(|re| (label, re)))
            .collect()
    })
}

/// Returns the value of the first `label: value` (or `label - value`, `label | value`)
/// line found, trying `labels` in priority order. Labels match case-insensitively
/// at the start of a line.
pub fn extract_line_value(text: &str, labels: &[&str]) -> Option<String> {
    labels.iter().find_map(|label| match known_label_regexes().get(*label) {
        Some(re) => first_line_value(re, text),
        None => first_line_value(&build_label_regex(label)?, text),
    })
}

fn first_line_value(re: &Regex, text: &str) -> Option<String> {
    re.captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .find(|value| !value.is_empty())
        .map(String::from)
}

/// Returns the first dollar range such as `$120,000 - $150,000` or `$90k to $110k`.
pub fn extract_salary(text: &str) -> Option<String> {
    salary_regex().find(text).map(|m| m.as_str().to_string())
}

/// Pulls a short list of responsibility-like lines out of the text.
///
/// 1. Bulleted lines (`-` or `•`), markers stripped.
/// 2. Otherwise, the lines of a fixed window starting at the first anchor found.
/// 3. Otherwise, the first few non-empty lines as they are.
pub fn extract_bullets(text: &str, anchors: &[&str]) -> Vec<String> {
    let bullets: Vec<String> = text
        .lines()
        .map(str::trim)
        .filter(|line| line.starts_with(BULLET_MARKERS))
        .map(strip_bullet_marker)
        .filter(|line| !line.is_empty())
        .take(MAX_BULLETS)
        .map(String::from)
        .collect();
    if !bullets.is_empty() {
        return bullets;
    }

    for anchor in anchors {
        let Some(start) = find_case_insensitive(text, anchor) else {
            continue;
        };
        let window: String = text[start..].chars().take(ANCHOR_WINDOW_CHARS).collect();
        let lines: Vec<String> = window
            .lines()
            .map(strip_bullet_marker)
            .filter(|line| !line.is_empty())
            .take(MAX_BULLETS)
            .map(String::from)
            .collect();
        if !lines.is_empty() {
            return lines;
        }
    }

    non_empty_lines(text)
        .take(MAX_FALLBACK_LINES)
        .map(String::from)
        .collect()
}

/// Catalog skills mentioned in `text`, in catalog order.
///
/// `preferred = false` returns the first ten matches; `preferred = true` returns the
/// last six. The split is positional only: both draw on the same matches.
pub fn extract_skills(text: &str, preferred: bool) -> Vec<String> {
    let haystack = text.to_lowercase();
    let matches: Vec<&str> = SKILL_CATALOG
        .iter()
        .copied()
        .filter(|skill| haystack.contains(&skill.to_lowercase()))
        .collect();

    let selected = if preferred {
        &matches[matches.len().saturating_sub(MAX_PREFERRED_SKILLS)..]
    } else {
        &matches[..matches.len().min(MAX_REQUIRED_SKILLS)]
    };
    selected.iter().map(|s| s.to_string()).collect()
}

/// Lowercased word tokens of a candidate profile. `+`, `#` and `.` are kept
/// inside tokens so `c++`, `c#` and `node.js` survive.
pub fn extract_candidate_skills(profile: &str) -> HashSet<String> {
    let lowered = profile.to_lowercase();
    candidate_token_regex()
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// First three non-empty lines joined by single spaces.
pub fn summarize_text(text: &str) -> String {
    non_empty_lines(text)
        .take(SUMMARY_LINES)
        .collect::<Vec<_>>()
        .join(" ")
}

fn non_empty_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines().map(str::trim).filter(|line| !line.is_empty())
}

fn strip_bullet_marker(line: &str) -> &str {
    line.trim().trim_start_matches(BULLET_MARKERS).trim()
}

/// Byte offset of the first case-insensitive occurrence of `needle` in `text`.
/// Offsets stay valid for `text` because only ASCII is folded.
fn find_case_insensitive(text: &str, needle: &str) -> Option<usize> {
    text.to_ascii_lowercase().find(&needle.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_value_basic_labels() {
        let text = "Title: Senior Engineer\nCompany: Acme Corp\n";
        assert_eq!(
            extract_line_value(text, &["title", "role", "position"]).as_deref(),
            Some("Senior Engineer")
        );
        assert_eq!(
            extract_line_value(text, &["company", "organization"]).as_deref(),
            Some("Acme Corp")
        );
    }

    #[test]
    fn test_line_value_is_case_insensitive_and_accepts_dash() {
        let text = "LOCATION - Remote (US)";
        assert_eq!(
            extract_line_value(text, &["location"]).as_deref(),
            Some("Remote (US)")
        );
    }

    #[test]
    fn test_line_value_label_priority_beats_line_order() {
        let text = "Position: Staff Engineer\nTitle: Senior Engineer";
        assert_eq!(
            extract_line_value(text, &["title", "role", "position"]).as_deref(),
            Some("Senior Engineer")
        );
    }

    #[test]
    fn test_line_value_requires_label_at_line_start() {
        let text = "Your job title: unknown\nWe are hiring";
        assert_eq!(extract_line_value(text, &["title"]), None);
    }

    #[test]
    fn test_line_value_does_not_spill_onto_next_line() {
        let text = "Title:\nAcme builds rockets";
        assert_eq!(extract_line_value(text, &["title"]), None);
    }

    #[test]
    fn test_salary_range_with_commas() {
        let text = "Compensation: $120,000 - $150,000 per year plus equity";
        assert_eq!(extract_salary(text).as_deref(), Some("$120,000 - $150,000"));
    }

    #[test]
    fn test_salary_range_with_to_and_k_suffix() {
        assert_eq!(
            extract_salary("Pay band $90k to $110k").as_deref(),
            Some("$90k to $110k")
        );
    }

    #[test]
    fn test_salary_range_without_commas() {
        let text = "Budget is $120000 - $150000 depending on level";
        assert_eq!(extract_salary(text).as_deref(), Some("$120000 - $150000"));
    }

    #[test]
    fn test_salary_range_with_space_after_dollar() {
        assert_eq!(
            extract_salary("Range: $ 120,000 - 150,000 USD").as_deref(),
            Some("$ 120,000 - 150,000")
        );
    }

    #[test]
    fn test_salary_absent() {
        assert_eq!(extract_salary("Competitive pay, great benefits"), None);
    }

    #[test]
    fn test_line_value_unknown_label_still_matches() {
        let text = "Team: Platform\nReports to: CTO";
        assert_eq!(extract_line_value(text, &["team"]).as_deref(), Some("Platform"));
        assert_eq!(
            extract_line_value(text, &["reports to"]).as_deref(),
            Some("CTO")
        );
    }

    #[test]
    fn test_bullets_prefers_marked_lines() {
        let text = "About the role\n- Build APIs\n• Own pipelines\nOther text";
        assert_eq!(
            extract_bullets(text, &["responsibilities"]),
            vec!["Build APIs", "Own pipelines"]
        );
    }

    #[test]
    fn test_bullets_capped_at_six() {
        let text = (1..=9)
            .map(|i| format!("- Task {i}"))
            .collect::<Vec<_>>()
            .join("\n");
        let bullets = extract_bullets(&text, &[]);
        assert_eq!(bullets.len(), 6);
        assert_eq!(bullets[5], "Task 6");
    }

    #[test]
    fn test_bullets_fall_back_to_anchor_window() {
        let text = "About us\nWe make tools.\n\nResponsibilities: design systems\nship features\n";
        assert_eq!(
            extract_bullets(text, &["responsibilities", "what you will do"]),
            vec!["Responsibilities: design systems", "ship features"]
        );
    }

    #[test]
    fn test_bullets_anchor_window_is_bounded() {
        let filler = "x".repeat(500);
        let text = format!("What you will do\n{filler}\nnever reached");
        let lines = extract_bullets(&text, &["responsibilities", "what you will do"]);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "What you will do");
        assert!(!lines.iter().any(|l| l.contains("never reached")));
    }

    #[test]
    fn test_bullets_fall_back_to_first_lines() {
        let text = "One\n\nTwo\nThree\nFour\nFive\nSix";
        assert_eq!(
            extract_bullets(text, &["responsibilities"]),
            vec!["One", "Two", "Three", "Four", "Five"]
        );
    }

    #[test]
    fn test_skills_follow_catalog_order() {
        let skills = extract_skills("We use docker, FastAPI and PYTHON daily", false);
        assert_eq!(skills, vec!["Python", "FastAPI", "Docker"]);
    }

    #[test]
    fn test_skills_substring_matches_are_kept() {
        // "PostgreSQL" also contains "SQL"; "Productive" contains "Product".
        let skills = extract_skills("PostgreSQL experience, productive with CI/CD", false);
        assert_eq!(skills, vec!["SQL", "PostgreSQL", "CI/CD", "Product"]);
    }

    #[test]
    fn test_skills_required_first_ten_preferred_last_six() {
        let text = "Python React AWS Docker Kubernetes REST GraphQL Figma";
        let required = extract_skills(text, false);
        assert_eq!(
            required,
            vec!["Python", "React", "AWS", "Docker", "Kubernetes", "REST", "GraphQL", "Figma"]
        );
        let preferred = extract_skills(text, true);
        assert_eq!(
            preferred,
            vec!["AWS", "Docker", "Kubernetes", "REST", "GraphQL", "Figma"]
        );
    }

    #[test]
    fn test_skills_required_capped_at_ten() {
        let text = SKILL_CATALOG.join(" ");
        let required = extract_skills(&text, false);
        assert_eq!(required.len(), 10);
        assert_eq!(required[0], "Python");
        assert_eq!(required[9], "Next.js");
        let preferred = extract_skills(&text, true);
        assert_eq!(
            preferred,
            vec!["Tailwind", "Chakra", "MUI", "Figma", "Product", "Analytics"]
        );
    }

    #[test]
    fn test_skills_none_found() {
        assert!(extract_skills("Brew coffee and greet customers", false).is_empty());
        assert!(extract_skills("", true).is_empty());
    }

    #[test]
    fn test_candidate_tokens_keep_symbols() {
        let tokens = extract_candidate_skills("Expert in C++, C# and Node.js; some Python");
        assert!(tokens.contains("c++"));
        assert!(tokens.contains("c#"));
        assert!(tokens.contains("node.js"));
        assert!(tokens.contains("python"));
        assert!(!tokens.contains("Python"));
    }

    #[test]
    fn test_candidate_tokens_drop_digits() {
        let tokens = extract_candidate_skills("Python3 for 5 years");
        assert!(tokens.contains("python"));
        assert!(tokens.contains("for"));
        assert!(!tokens.iter().any(|t| t.chars().any(|c| c.is_ascii_digit())));
    }

    #[test]
    fn test_summarize_first_three_lines() {
        let text = "\n  First line  \n\nSecond\nThird\nFourth";
        assert_eq!(summarize_text(text), "First line Second Third");
        assert_eq!(summarize_text(""), "");
    }
}
