use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::profile::EducationLevel;

/// A single actionable step inside a plan phase.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanTask {
    pub id: Uuid,
    pub text: String,
    pub completed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanPhase {
    pub title: String,
    pub duration: String,
    pub tasks: Vec<PlanTask>,
}

/// Multi-phase action plan. Owned by the UI/storage layer once generated;
/// the core does not mutate it after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionPlan {
    pub id: Uuid,
    pub career_title: String,
    pub education_level: Option<EducationLevel>,
    pub timeline: String,
    pub phases: Vec<PlanPhase>,
    pub created_at: DateTime<Utc>,
}
