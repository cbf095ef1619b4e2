//! Journal Analyzer — deterministic keyword pipeline with an AI fallback
//! that only fires on low-confidence local results.
//!
//! Flow: lowercase concat → per-category keyword counts → tone detection →
//!       suggestion lookup → narrative composition → (optional) remote
//!       fallback → validate.
//!
//! Total function: always returns a populated, schema-valid result.

use tracing::{info, warn};

use crate::journal::keywords::{
    ThemeCategory, CHALLENGE_WORDS, GENERIC_SUGGESTIONS, NEGATIVE_WORDS, POSITIVE_WORDS,
    THEME_CATEGORIES,
};
use crate::journal::prompts::{journal_analysis_system, JOURNAL_ANALYSIS_PROMPT_TEMPLATE};
use crate::llm_client::{complete_json, Inference};
use crate::models::journal::{JournalAnalysisResult, MAX_SUGGESTIONS};
use crate::models::matching::Confidence;
use serde::Deserialize;

/// A category qualifies as a detected theme at this many keyword hits.
const MIN_CATEGORY_HITS: usize = 2;
/// Tone flips away from neutral only past this margin.
const TONE_MARGIN: usize = 2;

/// Minimum lengths an AI fallback reply must clear to displace local output.
const MIN_AI_SUGGESTIONS_LEN: usize = 10;
const MIN_AI_ANALYSIS_LEN: usize = 20;

// ────────────────────────────────────────────────────────────────────────────
// Public operation
// ────────────────────────────────────────────────────────────────────────────

/// Analyzes a journal entry. Infallible by contract.
pub async fn analyze_journal(
    inference: &dyn Inference,
    journal_text: &str,
    feelings_text: &str,
    allow_remote_fallback: bool,
) -> JournalAnalysisResult {
    let text = format!("{journal_text} {feelings_text}").to_lowercase();

    let mut result = analyze_locally(&text);

    if allow_remote_fallback && result.confidence == Confidence::Low {
        info!("Local journal analysis is low-confidence, attempting remote fallback");
        if let Some(remote) = attempt_remote_analysis(inference, journal_text, feelings_text).await
        {
            result.career_suggestions = remote.career_suggestions;
            result.analysis = remote.analysis;
        }
    }

    match result.validate() {
        Ok(()) => result,
        Err(reason) => {
            warn!("Journal analysis result failed validation ({reason}), returning fallback");
            JournalAnalysisResult::fallback()
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Local deterministic pipeline
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tone {
    Positive,
    Negative,
    Neutral,
}

fn analyze_locally(text: &str) -> JournalAnalysisResult {
    let detected = detect_themes(text);
    let tone = detect_tone(text);

    let career_suggestions = collect_suggestions(&detected);
    let analysis = compose_analysis(&detected, tone, text);
    let confidence = match detected.len() {
        0 => Confidence::Low,
        1 => Confidence::Medium,
        _ => Confidence::High,
    };

    JournalAnalysisResult {
        career_suggestions,
        analysis,
        confidence,
        themes: detected.iter().map(|c| c.name.to_string()).collect(),
        success: true,
    }
}

/// Categories whose keyword hit count reaches the qualifying threshold,
/// in table order.
fn detect_themes(text: &str) -> Vec<&'static ThemeCategory> {
    THEME_CATEGORIES
        .iter()
        .filter(|category| {
            let hits: usize = category
                .keywords
                .iter()
                .map(|k| text.matches(k).count())
                .sum();
            hits >= MIN_CATEGORY_HITS
        })
        .collect()
}

fn detect_tone(text: &str) -> Tone {
    let positive: usize = POSITIVE_WORDS.iter().map(|w| text.matches(w).count()).sum();
    let negative: usize = NEGATIVE_WORDS.iter().map(|w| text.matches(w).count()).sum();

    if positive > negative + TONE_MARGIN {
        Tone::Positive
    } else if negative > positive + TONE_MARGIN {
        Tone::Negative
    } else {
        Tone::Neutral
    }
}

/// Concatenates per-theme suggestion lists, deduplicates preserving
/// first-seen order, and caps the result. No detected themes yields the
/// fixed generic list.
fn collect_suggestions(detected: &[&'static ThemeCategory]) -> Vec<String> {
    if detected.is_empty() {
        return GENERIC_SUGGESTIONS.iter().map(|s| s.to_string()).collect();
    }

    let mut suggestions: Vec<String> = Vec::new();
    for category in detected {
        for suggestion in category.suggestions {
            if !suggestions.iter().any(|s| s == suggestion) {
                suggestions.push(suggestion.to_string());
            }
            if suggestions.len() == MAX_SUGGESTIONS {
                return suggestions;
            }
        }
    }
    suggestions
}

fn compose_analysis(detected: &[&'static ThemeCategory], tone: Tone, text: &str) -> String {
    let theme_clause = if detected.is_empty() {
        "Your entry doesn't point to one dominant theme yet, which is common early in \
        self-reflection."
            .to_string()
    } else {
        let names: Vec<&str> = detected.iter().map(|c| c.name).collect();
        format!(
            "Your writing shows clear {} tendencies.",
            names.join(" and ")
        )
    };

    let tone_clause = match tone {
        Tone::Positive => {
            "The overall tone is upbeat — you write with energy about what you're doing."
        }
        Tone::Negative => {
            "The overall tone carries some weight; whatever you choose next should \
            relieve pressure rather than add to it."
        }
        Tone::Neutral => "The tone is even-keeled, neither drained nor euphoric.",
    };

    let challenge_clause = if CHALLENGE_WORDS.iter().any(|w| text.contains(w)) {
        " You also describe working through real challenges, and how you handle those \
        says a lot about the environments you'd thrive in."
    } else {
        ""
    };

    format!(
        "{theme_clause} {tone_clause}{challenge_clause} Based on these patterns, \
        the career directions below are worth a closer look."
    )
}

// ────────────────────────────────────────────────────────────────────────────
// Remote fallback
// ────────────────────────────────────────────────────────────────────────────

/// Raw reply from the remote journal-analysis call.
#[derive(Debug, Deserialize)]
struct AiJournalAnalysis {
    career_suggestions: Option<String>,
    analysis: Option<String>,
}

struct AcceptedRemote {
    career_suggestions: Vec<String>,
    analysis: String,
}

/// Job titles the acceptance check scans for; a reply that names none of
/// these and isn't list-formatted is discarded as unusable.
const CAREER_INTEREST_KEYWORDS: &[&str] = &[
    "engineer", "designer", "developer", "analyst", "teacher", "writer", "manager", "scientist",
    "counselor", "artist", "technician", "consultant", "coordinator", "specialist",
];

/// One remote attempt; any failure or implausible reply yields `None` and
/// the local result stands.
async fn attempt_remote_analysis(
    inference: &dyn Inference,
    journal_text: &str,
    feelings_text: &str,
) -> Option<AcceptedRemote> {
    let prompt = JOURNAL_ANALYSIS_PROMPT_TEMPLATE
        .replace("{journal_text}", journal_text)
        .replace("{feelings_text}", feelings_text);

    let reply = match complete_json::<AiJournalAnalysis>(
        inference,
        &prompt,
        &journal_analysis_system(),
    )
    .await
    {
        Ok(reply) => reply,
        Err(e) => {
            warn!("Remote journal analysis failed, keeping local result: {e}");
            return None;
        }
    };

    let suggestions_text = reply.career_suggestions.unwrap_or_default();
    let analysis = reply.analysis.unwrap_or_default();

    if suggestions_text.trim().len() <= MIN_AI_SUGGESTIONS_LEN
        || analysis.trim().len() <= MIN_AI_ANALYSIS_LEN
    {
        warn!("Remote journal analysis too short to trust, keeping local result");
        return None;
    }

    let lower = suggestions_text.to_lowercase();
    let names_career = CAREER_INTEREST_KEYWORDS.iter().any(|k| lower.contains(k));
    if !names_career && !looks_list_formatted(&suggestions_text) {
        warn!("Remote journal suggestions look unusable, keeping local result");
        return None;
    }

    let career_suggestions = parse_suggestion_lines(&suggestions_text);
    if career_suggestions.is_empty() {
        return None;
    }

    Some(AcceptedRemote {
        career_suggestions,
        analysis: analysis.trim().to_string(),
    })
}

/// True when at least one line carries numbered or bulleted list markers.
fn looks_list_formatted(text: &str) -> bool {
    text.lines().any(|line| {
        let line = line.trim();
        line.starts_with("- ")
            || line
                .chars()
                .next()
                .is_some_and(|c| c.is_ascii_digit() && (line.contains(". ") || line.contains(") ")))
    })
}

/// Splits a numbered/bulleted suggestion string into clean items,
/// deduplicated and capped like the local list.
fn parse_suggestion_lines(text: &str) -> Vec<String> {
    let mut suggestions: Vec<String> = Vec::new();
    for line in text.lines() {
        let item = line
            .trim()
            .trim_start_matches(|c: char| c.is_ascii_digit() || c == '.' || c == ')' || c == '-')
            .trim();
        if item.is_empty() {
            continue;
        }
        if !suggestions.iter().any(|s| s.eq_ignore_ascii_case(item)) {
            suggestions.push(item.to_string());
        }
        if suggestions.len() == MAX_SUGGESTIONS {
            break;
        }
    }
    suggestions
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
