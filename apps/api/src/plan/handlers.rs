//! Axum route handlers for the Plan API.

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::plan::ActionPlan;
use crate::models::profile::EducationLevel;
use crate::plan::generator::generate_plan;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct GeneratePlanRequest {
    pub career_goal: String,
    #[serde(default)]
    pub education_level: Option<EducationLevel>,
    #[serde(default)]
    pub user_details: String,
}

/// POST /api/v1/plan
pub async fn handle_generate_plan(
    State(state): State<AppState>,
    Json(request): Json<GeneratePlanRequest>,
) -> Result<Json<ActionPlan>, AppError> {
    if request.career_goal.trim().is_empty() {
        return Err(AppError::Validation(
            "career_goal cannot be empty".to_string(),
        ));
    }

    let plan = generate_plan(
        state.inference.as_ref(),
        request.career_goal.trim(),
        request.education_level,
        &request.user_details,
    )
    .await?;

    Ok(Json(plan))
}
