use serde::{Deserialize, Serialize};

/// Self-assessment profile collected by the UI. The core never stores it;
/// it arrives with each request and is consumed as a single narrative string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub passions: String,
    pub skills: String,
    pub values: String,
    pub interests: String,
    #[serde(default)]
    pub education_level: Option<EducationLevel>,
}

impl UserProfile {
    /// Serializes the four free-text fields (and education, when given) into
    /// the narrative consumed by theme extraction and AI scoring.
    pub fn narrative(&self) -> String {
        let mut narrative = format!(
            "Passions: {}\nSkills: {}\nValues: {}\nInterests: {}",
            self.passions.trim(),
            self.skills.trim(),
            self.values.trim(),
            self.interests.trim()
        );
        if let Some(level) = &self.education_level {
            narrative.push_str(&format!("\nEducation level: {}", level.as_str()));
        }
        narrative
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EducationLevel {
    HighSchool,
    Associate,
    Bachelor,
    Master,
    Doctorate,
    SelfTaught,
}

impl EducationLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            EducationLevel::HighSchool => "high school",
            EducationLevel::Associate => "associate degree",
            EducationLevel::Bachelor => "bachelor's degree",
            EducationLevel::Master => "master's degree",
            EducationLevel::Doctorate => "doctorate",
            EducationLevel::SelfTaught => "self-taught",
        }
    }
}

/// A categorical label summarizing one facet of a profile.
///
/// The vocabulary is closed: labels outside it are dropped at parse time,
/// never errored. Duplicates in a theme list are semantically inert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Theme {
    Tech,
    Arts,
    Science,
    Business,
    Healthcare,
    Education,
    Physics,
    Chemistry,
    Music,
}

impl Theme {
    pub const ALL: [Theme; 9] = [
        Theme::Tech,
        Theme::Arts,
        Theme::Science,
        Theme::Business,
        Theme::Healthcare,
        Theme::Education,
        Theme::Physics,
        Theme::Chemistry,
        Theme::Music,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Tech => "Tech",
            Theme::Arts => "Arts",
            Theme::Science => "Science",
            Theme::Business => "Business",
            Theme::Healthcare => "Healthcare",
            Theme::Education => "Education",
            Theme::Physics => "Physics",
            Theme::Chemistry => "Chemistry",
            Theme::Music => "Music",
        }
    }

    /// Case-insensitive parse against the closed vocabulary.
    /// Unknown labels yield `None` and are dropped by callers.
    pub fn parse(label: &str) -> Option<Theme> {
        let label = label.trim();
        Theme::ALL
            .iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(label))
            .copied()
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_narrative_includes_all_fields() {
        let profile = UserProfile {
            passions: "building things".to_string(),
            skills: "rust, sql".to_string(),
            values: "autonomy".to_string(),
            interests: "distributed systems".to_string(),
            education_level: Some(EducationLevel::Bachelor),
        };
        let narrative = profile.narrative();
        assert!(narrative.contains("building things"));
        assert!(narrative.contains("rust, sql"));
        assert!(narrative.contains("autonomy"));
        assert!(narrative.contains("distributed systems"));
        assert!(narrative.contains("bachelor's degree"));
    }

    #[test]
    fn test_narrative_omits_missing_education() {
        let profile = UserProfile {
            passions: "a".to_string(),
            skills: "b".to_string(),
            values: "c".to_string(),
            interests: "d".to_string(),
            education_level: None,
        };
        assert!(!profile.narrative().contains("Education level"));
    }

    #[test]
    fn test_theme_parse_is_case_insensitive() {
        assert_eq!(Theme::parse("tech"), Some(Theme::Tech));
        assert_eq!(Theme::parse("TECH"), Some(Theme::Tech));
        assert_eq!(Theme::parse(" Physics "), Some(Theme::Physics));
    }

    #[test]
    fn test_theme_parse_drops_unknown_labels() {
        assert_eq!(Theme::parse("Astrology"), None);
        assert_eq!(Theme::parse(""), None);
    }

    #[test]
    fn test_education_level_serde_snake_case() {
        let json = serde_json::to_string(&EducationLevel::HighSchool).unwrap();
        assert_eq!(json, "\"high_school\"");
        let level: EducationLevel = serde_json::from_str("\"self_taught\"").unwrap();
        assert_eq!(level, EducationLevel::SelfTaught);
    }
}
