//! Theme Extractor — maps a free-text profile narrative to labels from the
//! closed theme vocabulary via remote inference.
//!
//! Failure policy: any network, timeout, or parse problem yields an empty
//! theme list, never an error. Downstream scoring treats "no themes" as a
//! legitimate low-information input.

use tracing::{debug, warn};

use crate::llm_client::{extract, Inference};
use crate::matching::prompts::{THEME_EXTRACTION_PROMPT_TEMPLATE, THEME_EXTRACTION_SYSTEM};
use crate::models::profile::Theme;

/// Extracts themes from a profile narrative. Infallible by contract.
pub async fn extract_themes(inference: &dyn Inference, narrative: &str) -> Vec<Theme> {
    let prompt = THEME_EXTRACTION_PROMPT_TEMPLATE.replace("{narrative}", narrative);

    let text = match inference.complete(&prompt, THEME_EXTRACTION_SYSTEM).await {
        Ok(text) => text,
        Err(e) => {
            warn!("Theme extraction call failed, treating as no themes: {e}");
            return vec![];
        }
    };

    let themes = parse_theme_labels(&text);
    debug!("Extracted {} themes from narrative", themes.len());
    themes
}

/// Recovers the first JSON array in the reply and parses each element against
/// the closed vocabulary, dropping unknown labels. Malformed replies parse to
/// an empty list.
fn parse_theme_labels(text: &str) -> Vec<Theme> {
    let text = extract::strip_json_fences(text);
    let payload = match extract::first_json_array(text) {
        Some(payload) => payload,
        None => {
            warn!("Theme extraction reply contained no JSON array");
            return vec![];
        }
    };

    let labels: Vec<String> = match serde_json::from_str(payload) {
        Ok(labels) => labels,
        Err(e) => {
            warn!("Theme extraction reply was not a string array: {e}");
            return vec![];
        }
    };

    labels.iter().filter_map(|l| Theme::parse(l)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::test_support::{FailingInference, ScriptedInference, Step};

    #[tokio::test]
    async fn test_extracts_known_themes() {
        let stub = ScriptedInference::new(vec![Step::Text(r#"["Tech", "Science"]"#)]);
        let themes = extract_themes(&stub, "I love programming and research").await;
        assert_eq!(themes, vec![Theme::Tech, Theme::Science]);
    }

    #[tokio::test]
    async fn test_drops_unknown_labels() {
        let stub = ScriptedInference::new(vec![Step::Text(r#"["Tech", "Astrology", "music"]"#)]);
        let themes = extract_themes(&stub, "profile").await;
        assert_eq!(themes, vec![Theme::Tech, Theme::Music]);
    }

    #[tokio::test]
    async fn test_recovers_array_from_prose_and_fences() {
        let stub = ScriptedInference::new(vec![Step::Text(
            "Here you go:\n```json\n[\"Arts\"]\n```",
        )]);
        let themes = extract_themes(&stub, "profile").await;
        assert_eq!(themes, vec![Theme::Arts]);
    }

    #[tokio::test]
    async fn test_remote_failure_yields_empty_set() {
        let themes = extract_themes(&FailingInference, "profile").await;
        assert!(themes.is_empty());
    }

    #[tokio::test]
    async fn test_malformed_reply_yields_empty_set() {
        let stub = ScriptedInference::new(vec![Step::Text("no array here")]);
        assert!(extract_themes(&stub, "profile").await.is_empty());

        let stub = ScriptedInference::new(vec![Step::Text(r#"[1, 2, 3]"#)]);
        assert!(extract_themes(&stub, "profile").await.is_empty());
    }
}
