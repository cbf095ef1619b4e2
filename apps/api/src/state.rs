use std::sync::Arc;

use crate::catalog;
use crate::config::Config;
use crate::llm_client::Inference;
use crate::models::career::Career;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The remote inference seam. Production wires `LlmClient`; tests inject
    /// deterministic stubs so every pipeline runs without a network.
    pub inference: Arc<dyn Inference>,
    pub config: Config,
    /// Read-only career catalog. Supplied to the core, never owned by it.
    pub catalog: &'static [Career],
}

impl AppState {
    pub fn new(inference: Arc<dyn Inference>, config: Config) -> Self {
        Self {
            inference,
            config,
            catalog: catalog::all(),
        }
    }
}
