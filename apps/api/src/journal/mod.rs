// Journal analysis pipeline: keyword-frequency theme detection, emotional
// tone detection, static suggestion lookup, and a remote fallback that only
// fires on low-confidence local results.
// All LLM calls go through llm_client — no direct Anthropic calls here.

pub mod analyzer;
pub mod handlers;
pub mod keywords;
pub mod prompts;
