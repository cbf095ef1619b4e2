use serde::{Deserialize, Serialize};

use crate::models::matching::Confidence;

/// Maximum number of career suggestions returned by journal analysis.
pub const MAX_SUGGESTIONS: usize = 5;

/// Output of the journal-analysis pipeline. Total function: the producing
/// operation always returns a populated, schema-valid object, flipping
/// `success` to false only on the internal-fault fallback path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalAnalysisResult {
    /// Ordered, deduplicated, capped at `MAX_SUGGESTIONS`.
    pub career_suggestions: Vec<String>,
    pub analysis: String,
    pub confidence: Confidence,
    /// Detected journal theme labels (creative, technical, ...).
    pub themes: Vec<String>,
    pub success: bool,
}

impl JournalAnalysisResult {
    /// Fixed degraded result for internal faults: self-reflection-oriented
    /// suggestions rather than a visibly-broken placeholder.
    pub fn fallback() -> Self {
        JournalAnalysisResult {
            career_suggestions: vec![
                "Career Counselor".to_string(),
                "Human Resources Specialist".to_string(),
                "Project Coordinator".to_string(),
                "Teacher".to_string(),
                "Writer".to_string(),
            ],
            analysis: "We couldn't finish a detailed reading of this entry. \
                Journaling about what energized or drained you this week is a \
                great way to surface patterns — keep writing and try the \
                analysis again."
                .to_string(),
            confidence: Confidence::Medium,
            themes: vec![],
            success: false,
        }
    }

    /// Renders the suggestion list as numbered text for display.
    pub fn numbered_suggestions(&self) -> String {
        self.career_suggestions
            .iter()
            .enumerate()
            .map(|(i, s)| format!("{}. {}", i + 1, s))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Schema check applied before the result crosses the pipeline boundary.
    pub fn validate(&self) -> Result<(), String> {
        if self.career_suggestions.is_empty() {
            return Err("career_suggestions is empty".to_string());
        }
        if self.career_suggestions.len() > MAX_SUGGESTIONS {
            return Err(format!(
                "career_suggestions over cap: {}",
                self.career_suggestions.len()
            ));
        }
        if self.analysis.trim().is_empty() {
            return Err("analysis is empty".to_string());
        }
        Ok(())
    }
}
