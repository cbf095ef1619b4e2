//! Axum route handlers for the career catalog.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use crate::catalog;
use crate::errors::AppError;
use crate::models::career::Career;
use crate::state::AppState;

#[derive(Serialize)]
pub struct CareerListResponse {
    pub careers: &'static [Career],
}

/// GET /api/v1/careers
pub async fn handle_list_careers(
    State(state): State<AppState>,
) -> Result<Json<CareerListResponse>, AppError> {
    Ok(Json(CareerListResponse {
        careers: state.catalog,
    }))
}

/// GET /api/v1/careers/:id
pub async fn handle_get_career(
    Path(id): Path<u32>,
) -> Result<Json<&'static Career>, AppError> {
    catalog::find_by_id(id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Career {id} not found")))
}
