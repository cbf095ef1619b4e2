//! Axum route handlers for the Match API.

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::errors::AppError;
use crate::matching::orchestrator::match_career;
use crate::models::matching::MatchResult;
use crate::models::profile::UserProfile;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct MatchRequest {
    pub profile: UserProfile,
    pub career_title: String,
    #[serde(default)]
    pub career_details: Option<String>,
    #[serde(default)]
    pub career_cluster: Option<String>,
}

/// POST /api/v1/match
///
/// Scores a career against the submitted profile. Only input validation can
/// fail here; the pipeline itself always produces a schema-valid result.
pub async fn handle_match(
    State(state): State<AppState>,
    Json(request): Json<MatchRequest>,
) -> Result<Json<MatchResult>, AppError> {
    if request.career_title.trim().is_empty() {
        return Err(AppError::Validation(
            "career_title cannot be empty".to_string(),
        ));
    }

    let result = match_career(
        state.inference.as_ref(),
        &request.profile.narrative(),
        request.career_title.trim(),
        request.career_details.as_deref().unwrap_or(""),
        request.career_cluster.as_deref(),
    )
    .await;

    Ok(Json(result))
}
