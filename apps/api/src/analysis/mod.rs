// Job-description analysis: text extraction, heuristic analyzer, LLM backend,
// and the orchestrator that composes them with a guaranteed fallback.
// All LLM calls go through llm_client, never direct HTTP calls here.

pub mod backend;
pub mod extract;
pub mod handlers;
pub mod heuristics;
pub mod models;
pub mod orchestrator;
pub mod prompts;
