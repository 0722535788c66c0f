// Shared prompt fragments. Each service that needs LLM calls defines its own
// prompts.rs alongside it; only cross-cutting pieces live here.

/// System prompt fragment that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT include explanations or apologies.";
