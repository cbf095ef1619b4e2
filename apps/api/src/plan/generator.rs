//! Action Plan Generator — delegates phase/task construction to remote
//! structured generation and stamps identity onto the result.
//!
//! Deliberately thin: the model's phases and tasks pass through unmodified
//! apart from ids, timestamps, and completion flags. There is no local
//! fallback on this path.

use chrono::Utc;
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::llm_client::{complete_json, Inference};
use crate::models::plan::{ActionPlan, PlanPhase, PlanTask};
use crate::models::profile::EducationLevel;
use crate::plan::prompts::{PLAN_PROMPT_TEMPLATE, PLAN_SYSTEM};

/// Structured reply from the plan-generation call.
#[derive(Debug, Deserialize)]
struct GeneratedPlan {
    timeline: String,
    phases: Vec<GeneratedPhase>,
}

#[derive(Debug, Deserialize)]
struct GeneratedPhase {
    title: String,
    duration: String,
    tasks: Vec<String>,
}

/// Generates a multi-phase action plan for a career goal.
pub async fn generate_plan(
    inference: &dyn Inference,
    career_goal: &str,
    education_level: Option<EducationLevel>,
    user_details: &str,
) -> Result<ActionPlan, AppError> {
    let prompt = PLAN_PROMPT_TEMPLATE
        .replace("{career_goal}", career_goal)
        .replace(
            "{education_level}",
            education_level.map(|l| l.as_str()).unwrap_or("unspecified"),
        )
        .replace("{user_details}", user_details);

    let generated: GeneratedPlan = complete_json(inference, &prompt, PLAN_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(format!("Plan generation failed: {e}")))?;

    let plan = ActionPlan {
        id: Uuid::new_v4(),
        career_title: career_goal.to_string(),
        education_level,
        timeline: generated.timeline,
        phases: generated
            .phases
            .into_iter()
            .map(|phase| PlanPhase {
                title: phase.title,
                duration: phase.duration,
                tasks: phase
                    .tasks
                    .into_iter()
                    .map(|text| PlanTask {
                        id: Uuid::new_v4(),
                        text,
                        completed: false,
                    })
                    .collect(),
            })
            .collect(),
        created_at: Utc::now(),
    };

    info!(
        "Generated action plan {} with {} phases for goal {career_goal}",
        plan.id,
        plan.phases.len()
    );

    Ok(plan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::test_support::{FailingInference, ScriptedInference, Step};

    const PLAN_REPLY: &str = r#"{
        "timeline": "Twelve months from first portfolio piece to first applications.",
        "phases": [
            {"title": "Immediate", "duration": "Next 2 weeks",
             "tasks": ["Set up a portfolio site", "Pick one design tool to learn"]},
            {"title": "3-Month", "duration": "Months 1-3",
             "tasks": ["Complete two case studies", "Join a local design community"]},
            {"title": "6-Month", "duration": "Months 4-6",
             "tasks": ["Take on a freelance brief", "Request portfolio reviews"]},
            {"title": "1-Year", "duration": "Months 7-12",
             "tasks": ["Apply to junior roles", "Prepare interview walkthroughs"]}
        ]
    }"#;

    #[tokio::test]
    async fn test_generated_plan_passes_through_with_stamped_identity() {
        let stub = ScriptedInference::new(vec![Step::Text(PLAN_REPLY)]);
        let plan = generate_plan(
            &stub,
            "UX Designer",
            Some(EducationLevel::Bachelor),
            "Career changer from marketing",
        )
        .await
        .unwrap();

        assert_eq!(plan.career_title, "UX Designer");
        assert_eq!(plan.education_level, Some(EducationLevel::Bachelor));
        assert_eq!(plan.phases.len(), 4);
        assert_eq!(plan.phases[0].title, "Immediate");
        assert_eq!(plan.phases[3].title, "1-Year");
        assert!(plan.timeline.contains("Twelve months"));

        // Every task starts incomplete with a unique id
        let mut task_ids = Vec::new();
        for phase in &plan.phases {
            for task in &phase.tasks {
                assert!(!task.completed);
                assert!(!task.text.is_empty());
                task_ids.push(task.id);
            }
        }
        task_ids.sort();
        task_ids.dedup();
        assert_eq!(task_ids.len(), 8);
    }

    #[tokio::test]
    async fn test_inference_failure_surfaces_as_llm_error() {
        let result = generate_plan(&FailingInference, "UX Designer", None, "details").await;
        assert!(matches!(result, Err(AppError::Llm(_))));
    }

    #[tokio::test]
    async fn test_malformed_reply_surfaces_as_llm_error() {
        let stub = ScriptedInference::new(vec![Step::Text("Here is your plan: step one...")]);
        let result = generate_plan(&stub, "UX Designer", None, "details").await;
        assert!(matches!(result, Err(AppError::Llm(_))));
    }
}
