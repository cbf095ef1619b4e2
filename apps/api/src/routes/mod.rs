pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::assistant;
use crate::catalog;
use crate::journal;
use crate::matching;
use crate::plan;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Career catalog (read-only)
        .route("/api/v1/careers", get(catalog::handlers::handle_list_careers))
        .route(
            "/api/v1/careers/:id",
            get(catalog::handlers::handle_get_career),
        )
        // Match pipeline
        .route("/api/v1/match", post(matching::handlers::handle_match))
        // Journal analysis
        .route(
            "/api/v1/journal/analyze",
            post(journal::handlers::handle_analyze_journal),
        )
        // Action plans
        .route("/api/v1/plan", post(plan::handlers::handle_generate_plan))
        // Conversational assistant
        .route(
            "/api/v1/assistant",
            post(assistant::handlers::handle_assistant),
        )
        .with_state(state)
}
