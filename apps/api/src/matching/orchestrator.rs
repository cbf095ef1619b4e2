//! Match Orchestrator — composes theme extraction, the local heuristic
//! scorer, the mismatch detector, an optional remote AI scoring attempt, and
//! explanation rendering into one infallible operation.
//!
//! Flow: extract_themes → {score, is_mismatch} → attempt AI score →
//!       accept-or-derive → confidence → explanation → validate.
//!
//! The public operation never errors to its caller: remote failures degrade
//! to the local deterministic path, and a schema-invalid assembly degrades to
//! the fixed fallback result.

use tracing::{info, warn};

use crate::llm_client::{complete_json, Inference};
use crate::matching::prompts::{MATCH_SCORING_PROMPT_TEMPLATE, MATCH_SCORING_SYSTEM};
use crate::matching::{explanation, mismatch, scorer, themes};
use crate::models::matching::{AiMatchScores, Confidence, MatchResult};
use crate::models::profile::Theme;

// ────────────────────────────────────────────────────────────────────────────
// Public operation
// ────────────────────────────────────────────────────────────────────────────

/// Scores a career against a profile narrative. Infallible by contract.
pub async fn match_career(
    inference: &dyn Inference,
    profile_narrative: &str,
    career_title: &str,
    career_details: &str,
    career_cluster: Option<&str>,
) -> MatchResult {
    // Step 1: themes (extractor failures already absorbed into an empty set)
    let user_themes = themes::extract_themes(inference, profile_narrative).await;

    // Step 2: deterministic local signals
    let base_score = scorer::score(&user_themes, career_title, career_cluster);
    let theme_mismatch = mismatch::is_mismatch(&user_themes, career_title, career_cluster);

    // Step 3: isolated remote scoring attempt
    let ai_scores = attempt_ai_score(
        inference,
        profile_narrative,
        career_title,
        career_details,
        career_cluster,
    )
    .await;

    // Step 4: accept the AI result only if it looks informative
    let result = match ai_scores {
        Some(scores) if scores.is_informative() => {
            info!("AI score accepted for {career_title}");
            from_ai_scores(scores, &user_themes, career_title, theme_mismatch, career_cluster)
        }
        other => {
            if other.is_some() {
                info!("AI score for {career_title} rejected as non-informative, using local heuristic");
            }
            // Step 5: local derivation from the heuristic base score
            from_local_score(base_score, &user_themes, career_title, theme_mismatch, career_cluster)
        }
    };

    // Step 8: a schema-invalid assembly never reaches the caller
    match result.validate() {
        Ok(()) => result,
        Err(reason) => {
            warn!("Assembled match result failed validation ({reason}), returning fallback for {career_title}");
            MatchResult::fallback(career_title)
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Remote scoring attempt
// ────────────────────────────────────────────────────────────────────────────

/// Requests AI scores for the career. Any failure yields `None`, never an
/// error — the local path is always available.
async fn attempt_ai_score(
    inference: &dyn Inference,
    profile_narrative: &str,
    career_title: &str,
    career_details: &str,
    career_cluster: Option<&str>,
) -> Option<AiMatchScores> {
    let prompt = MATCH_SCORING_PROMPT_TEMPLATE
        .replace("{narrative}", profile_narrative)
        .replace("{career_title}", career_title)
        .replace("{career_details}", career_details)
        .replace("{career_cluster}", career_cluster.unwrap_or("unspecified"));

    match complete_json::<AiMatchScores>(inference, &prompt, MATCH_SCORING_SYSTEM).await {
        Ok(scores) => Some(scores),
        Err(e) => {
            warn!("AI scoring call failed for {career_title}, using local heuristic: {e}");
            None
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Result assembly
// ────────────────────────────────────────────────────────────────────────────

/// Builds the result from accepted AI scores. Scores are clamped to [0,100];
/// the mismatch flag stays local, and a missing or blank AI explanation falls
/// back to the deterministic renderer.
fn from_ai_scores(
    scores: AiMatchScores,
    user_themes: &[Theme],
    career_title: &str,
    theme_mismatch: bool,
    career_cluster: Option<&str>,
) -> MatchResult {
    // is_informative guarantees overall is present
    let overall = clamp_score(scores.overall_score.unwrap_or_default());
    let explanation = match scores.explanation {
        Some(text) if !text.trim().is_empty() => text,
        _ => explanation::render(
            user_themes,
            career_title,
            overall as i32,
            theme_mismatch,
            career_cluster,
        ),
    };

    MatchResult {
        skill_match: clamp_score(scores.skill_match.unwrap_or_default()),
        interest_match: clamp_score(scores.interest_match.unwrap_or_default()),
        value_alignment: clamp_score(scores.value_alignment.unwrap_or_default()),
        overall_score: overall,
        theme_mismatch,
        confidence: Confidence::from_score(overall),
        explanation,
    }
}

/// Derives the four scores from the heuristic base score. A mismatch drags
/// the overall down and floors each component so no dimension bottoms out
/// at an implausible zero.
fn from_local_score(
    base_score: i32,
    user_themes: &[Theme],
    career_title: &str,
    theme_mismatch: bool,
    career_cluster: Option<&str>,
) -> MatchResult {
    let overall = if theme_mismatch {
        (base_score - 20).max(10)
    } else {
        base_score
    };
    let skill = if theme_mismatch {
        (overall - 10).max(15)
    } else {
        overall + 5
    };
    let interest = if theme_mismatch {
        (overall - 15).max(10)
    } else {
        overall
    };
    let value = if theme_mismatch {
        (overall - 5).max(20)
    } else {
        overall + 10
    };

    let overall = clamp_score(overall as i64);
    let explanation = explanation::render(
        user_themes,
        career_title,
        overall as i32,
        theme_mismatch,
        career_cluster,
    );

    MatchResult {
        skill_match: clamp_score(skill as i64),
        interest_match: clamp_score(interest as i64),
        value_alignment: clamp_score(value as i64),
        overall_score: overall,
        theme_mismatch,
        confidence: Confidence::from_score(overall),
        explanation,
    }
}

/// Mandatory post-hoc clamp: every component lands in [0,100] regardless of
/// upstream arithmetic.
fn clamp_score(score: i64) -> u32 {
    score.clamp(0, 100) as u32
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::test_support::{FailingInference, ScriptedInference, Step};

    fn assert_schema_valid(result: &MatchResult) {
        assert!(result.validate().is_ok(), "invalid result: {result:?}");
    }

    #[tokio::test]
    async fn test_never_fails_when_remote_always_rejects() {
        let result = match_career(
            &FailingInference,
            "I enjoy puzzles",
            "Software Engineer",
            "Builds software",
            None,
        )
        .await;

        assert_schema_valid(&result);
        // No themes extracted, no mismatch: base 50 → 50/55/50/60
        assert_eq!(result.overall_score, 50);
        assert_eq!(result.skill_match, 55);
        assert_eq!(result.interest_match, 50);
        assert_eq!(result.value_alignment, 60);
        assert_eq!(result.confidence, Confidence::Medium);
        assert!(!result.theme_mismatch);
    }

    #[tokio::test]
    async fn test_tech_profile_against_software_engineer_local_path() {
        // Themes resolve; AI scoring fails → local computation
        let stub = ScriptedInference::new(vec![Step::Text(r#"["Tech"]"#), Step::Fail]);
        let result = match_career(
            &stub,
            "I love building software",
            "Software Engineer",
            "Builds software systems",
            None,
        )
        .await;

        assert_schema_valid(&result);
        assert_eq!(result.overall_score, 75);
        assert_eq!(result.skill_match, 80);
        assert_eq!(result.interest_match, 75);
        assert_eq!(result.value_alignment, 85);
        assert!(!result.theme_mismatch);
        assert_eq!(result.confidence, Confidence::High);
        assert!(result.explanation.contains("Good Match"));
        assert!(result.explanation.contains("Software Engineer"));
    }

    #[tokio::test]
    async fn test_arts_profile_against_physicist_is_major_mismatch() {
        let stub = ScriptedInference::new(vec![Step::Text(r#"["Arts"]"#), Step::Fail]);
        let result = match_career(
            &stub,
            "I live for painting",
            "Physicist",
            "Studies matter and energy",
            None,
        )
        .await;

        assert_schema_valid(&result);
        // base 20, mismatch → overall max(10, 0) = 10
        assert_eq!(result.overall_score, 10);
        assert_eq!(result.skill_match, 15);
        assert_eq!(result.interest_match, 10);
        assert_eq!(result.value_alignment, 20);
        assert!(result.theme_mismatch);
        assert_eq!(result.confidence, Confidence::Low);
        assert!(result.explanation.contains("major mismatch"));
    }

    #[tokio::test]
    async fn test_informative_ai_scores_accepted_verbatim() {
        let stub = ScriptedInference::new(vec![
            Step::Text(r#"["Tech"]"#),
            Step::Text(
                r#"{"overall_score": 88, "skill_match": 90, "interest_match": 85,
                   "value_alignment": 80, "explanation": "Strong engineering profile."}"#,
            ),
        ]);
        let result = match_career(&stub, "profile", "Software Engineer", "details", None).await;

        assert_schema_valid(&result);
        assert_eq!(result.overall_score, 88);
        assert_eq!(result.skill_match, 90);
        assert_eq!(result.interest_match, 85);
        assert_eq!(result.value_alignment, 80);
        assert_eq!(result.confidence, Confidence::High);
        assert_eq!(result.explanation, "Strong engineering profile.");
    }

    #[tokio::test]
    async fn test_ai_generic_midpoint_rejected_for_local_computation() {
        // Regression: an exact 50 overall is a non-informative default
        let stub = ScriptedInference::new(vec![
            Step::Text(r#"["Tech"]"#),
            Step::Text(
                r#"{"overall_score": 50, "skill_match": 50, "interest_match": 50,
                   "value_alignment": 50, "explanation": "Average fit."}"#,
            ),
        ]);
        let result = match_career(&stub, "profile", "Software Engineer", "details", None).await;

        assert_schema_valid(&result);
        // Local path: table bonus → 75, not the AI's 50
        assert_eq!(result.overall_score, 75);
        assert_ne!(result.explanation, "Average fit.");
    }

    #[tokio::test]
    async fn test_ai_negative_sub_score_rejected() {
        let stub = ScriptedInference::new(vec![
            Step::Text(r#"["Tech"]"#),
            Step::Text(
                r#"{"overall_score": 80, "skill_match": -3, "interest_match": 70,
                   "value_alignment": 70, "explanation": "x"}"#,
            ),
        ]);
        let result = match_career(&stub, "profile", "Software Engineer", "details", None).await;
        assert_eq!(result.overall_score, 75, "local path expected");
    }

    #[tokio::test]
    async fn test_accepted_ai_sub_scores_are_clamped_to_100() {
        let stub = ScriptedInference::new(vec![
            Step::Text(r#"["Tech"]"#),
            Step::Text(
                r#"{"overall_score": 95, "skill_match": 150, "interest_match": 90,
                   "value_alignment": 90, "explanation": "Over-enthusiastic."}"#,
            ),
        ]);
        let result = match_career(&stub, "profile", "Software Engineer", "details", None).await;

        assert_schema_valid(&result);
        assert_eq!(result.skill_match, 100);
        assert_eq!(result.overall_score, 95);
    }

    #[tokio::test]
    async fn test_blank_ai_explanation_replaced_with_rendered_one() {
        let stub = ScriptedInference::new(vec![
            Step::Text(r#"["Tech"]"#),
            Step::Text(
                r#"{"overall_score": 85, "skill_match": 80, "interest_match": 85,
                   "value_alignment": 80, "explanation": "  "}"#,
            ),
        ]);
        let result = match_career(&stub, "profile", "Software Engineer", "details", None).await;

        assert_schema_valid(&result);
        assert!(result.explanation.contains("Software Engineer"));
        assert!(result.explanation.contains("Excellent Match"));
    }

    #[tokio::test]
    async fn test_malformed_ai_json_degrades_to_local() {
        let stub = ScriptedInference::new(vec![
            Step::Text(r#"["Arts"]"#),
            Step::Text("I'd rate this about a seven out of ten."),
        ]);
        let result = match_career(&stub, "profile", "Musician", "details", None).await;

        assert_schema_valid(&result);
        // Musician table: Arts required → 75; no mismatch
        assert_eq!(result.overall_score, 75);
    }

    #[tokio::test]
    async fn test_all_scores_bounded_for_hostile_ai_values() {
        // Accepted AI reply with extreme-but-valid overall and huge subs
        let stub = ScriptedInference::new(vec![
            Step::Text(r#"[]"#),
            Step::Text(
                r#"{"overall_score": 100, "skill_match": 100000, "interest_match": 0,
                   "value_alignment": 99, "explanation": "edge"}"#,
            ),
        ]);
        let result = match_career(&stub, "profile", "Anything", "details", None).await;

        for score in [
            result.overall_score,
            result.skill_match,
            result.interest_match,
            result.value_alignment,
        ] {
            assert!(score <= 100);
        }
        assert_schema_valid(&result);
    }
}
