//! Axum route handlers for the Assistant API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::assistant;
use crate::errors::AppError;
use crate::models::profile::UserProfile;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AssistantRequest {
    pub message: String,
    #[serde(default)]
    pub profile: Option<UserProfile>,
}

#[derive(Debug, Serialize)]
pub struct AssistantResponse {
    pub reply: String,
}

/// POST /api/v1/assistant
pub async fn handle_assistant(
    State(state): State<AppState>,
    Json(request): Json<AssistantRequest>,
) -> Result<Json<AssistantResponse>, AppError> {
    if request.message.trim().is_empty() {
        return Err(AppError::Validation("message cannot be empty".to_string()));
    }

    let narrative = request.profile.as_ref().map(|p| p.narrative());
    let reply = assistant::reply(
        state.inference.as_ref(),
        request.message.trim(),
        narrative.as_deref(),
    )
    .await?;

    Ok(Json(AssistantResponse { reply }))
}
