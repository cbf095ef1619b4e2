//! Axum route handlers for the Journal API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::journal::analyzer::analyze_journal;
use crate::models::journal::JournalAnalysisResult;
use crate::state::AppState;

/// Entries shorter than this (journal + feelings combined) are rejected
/// before any processing begins — the one validation error this pipeline
/// surfaces to the caller.
const MIN_ENTRY_LEN: usize = 20;

fn default_allow_remote() -> bool {
    true
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeJournalRequest {
    pub journal_text: String,
    #[serde(default)]
    pub feelings_text: String,
    #[serde(default = "default_allow_remote")]
    pub allow_remote_fallback: bool,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeJournalResponse {
    /// The suggestion list rendered as numbered display text.
    pub suggestions_text: String,
    #[serde(flatten)]
    pub result: JournalAnalysisResult,
}

/// POST /api/v1/journal/analyze
pub async fn handle_analyze_journal(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeJournalRequest>,
) -> Result<Json<AnalyzeJournalResponse>, AppError> {
    let combined_len = request.journal_text.trim().len() + request.feelings_text.trim().len();
    if combined_len < MIN_ENTRY_LEN {
        return Err(AppError::Validation(format!(
            "Journal entry too short to analyze, write at least {MIN_ENTRY_LEN} characters"
        )));
    }

    let result = analyze_journal(
        state.inference.as_ref(),
        &request.journal_text,
        &request.feelings_text,
        request.allow_remote_fallback,
    )
    .await;

    Ok(Json(AnalyzeJournalResponse {
        suggestions_text: result.numbered_suggestions(),
        result,
    }))
}
