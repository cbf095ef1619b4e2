// All LLM prompt constants for the journal module.
// Reuses cross-cutting fragments from llm_client::prompts.

use crate::llm_client::prompts::COUNSELOR_PERSONA;

/// System prompt for the remote journal-analysis fallback.
pub fn journal_analysis_system() -> String {
    format!(
        "{COUNSELOR_PERSONA} \
        You MUST respond with valid JSON only. \
        Do NOT include any text outside the JSON object. \
        Do NOT use markdown code fences."
    )
}

/// Journal analysis prompt template.
/// Replace: {journal_text}, {feelings_text}
pub const JOURNAL_ANALYSIS_PROMPT_TEMPLATE: &str = r#"Read this journal entry and reflection on feelings, then suggest career directions.

Return a JSON object with this EXACT schema (no extra fields):
{
  "career_suggestions": "1. First Career\n2. Second Career\n3. Third Career",
  "analysis": "Three to five sentences about the patterns, strengths, and energies visible in the writing."
}

Rules:
- career_suggestions is a numbered list, one career per line, at most five.
- Suggest concrete job titles, not fields of study.
- Ground the analysis in what the person actually wrote.

JOURNAL ENTRY:
{journal_text}

HOW THEY SAY THEY FEEL:
{feelings_text}"#;
