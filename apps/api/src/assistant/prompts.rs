// All LLM prompt constants for the assistant module.
// Reuses cross-cutting fragments from llm_client::prompts.

use crate::llm_client::prompts::COUNSELOR_PERSONA;

/// System prompt for assistant replies — plain text, not JSON.
pub fn assistant_system() -> String {
    format!(
        "{COUNSELOR_PERSONA} \
        Reply in plain conversational text, two to five sentences. \
        If the user shared a profile, anchor your advice to it. \
        End with one concrete next step the user can take this week."
    )
}

/// Assistant prompt template.
/// Replace: {profile_narrative}, {message}
pub const ASSISTANT_PROMPT_TEMPLATE: &str = r#"USER PROFILE:
{profile_narrative}

USER MESSAGE:
{message}"#;
