//! Conversational career assistant — mentor-style text replies that share
//! the compatibility model's profile narrative when one is supplied.
//!
//! Like the plan path, there is no local fallback: inference failure
//! surfaces to the caller as an error response.

pub mod handlers;
pub mod prompts;

use crate::errors::AppError;
use crate::llm_client::Inference;
use crate::assistant::prompts::{assistant_system, ASSISTANT_PROMPT_TEMPLATE};

/// Produces one mentor reply to a user message.
pub async fn reply(
    inference: &dyn Inference,
    message: &str,
    profile_narrative: Option<&str>,
) -> Result<String, AppError> {
    let prompt = ASSISTANT_PROMPT_TEMPLATE
        .replace(
            "{profile_narrative}",
            profile_narrative.unwrap_or("(no profile shared)"),
        )
        .replace("{message}", message);

    let text = inference
        .complete(&prompt, &assistant_system())
        .await
        .map_err(|e| AppError::Llm(format!("Assistant reply failed: {e}")))?;

    let text = text.trim();
    if text.is_empty() {
        return Err(AppError::Llm("Assistant returned an empty reply".to_string()));
    }
    Ok(text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::test_support::{FailingInference, ScriptedInference, Step};

    #[tokio::test]
    async fn test_reply_passes_through_model_text() {
        let stub = ScriptedInference::new(vec![Step::Text(
            "Shadowing a nurse for a day is the fastest way to test that instinct.",
        )]);
        let text = reply(&stub, "How do I know if nursing is for me?", None)
            .await
            .unwrap();
        assert!(text.contains("Shadowing a nurse"));
    }

    #[tokio::test]
    async fn test_inference_failure_surfaces_as_llm_error() {
        let result = reply(&FailingInference, "Any advice?", None).await;
        assert!(matches!(result, Err(AppError::Llm(_))));
    }

    #[tokio::test]
    async fn test_blank_reply_is_an_error_not_empty_text() {
        let stub = ScriptedInference::new(vec![Step::Text("   ")]);
        let result = reply(&stub, "Any advice?", None).await;
        assert!(matches!(result, Err(AppError::Llm(_))));
    }
}
