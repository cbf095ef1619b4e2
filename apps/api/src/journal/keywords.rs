//! Static keyword and suggestion tables for journal analysis.
//!
//! Represented as data rather than control flow so the tables are testable
//! and extensible on their own. All matching is lowercase-substring based;
//! several keywords are deliberate stems ("analyz", "organiz") so British
//! and American spellings both hit.

/// One of the nine fixed journal theme categories.
pub struct ThemeCategory {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
    pub suggestions: &'static [&'static str],
}

pub const THEME_CATEGORIES: &[ThemeCategory] = &[
    ThemeCategory {
        name: "creative",
        keywords: &[
            "creative", "design", "draw", "paint", "write", "writing", "imagin", "sketch", "craft",
        ],
        suggestions: &[
            "Graphic Designer",
            "Content Writer",
            "Art Director",
            "UX Designer",
        ],
    },
    ThemeCategory {
        name: "technical",
        keywords: &[
            "computer", "code", "coding", "program", "software", "technology", "technical", "debug",
            "engineer",
        ],
        suggestions: &[
            "Software Engineer",
            "Web Developer",
            "IT Specialist",
            "DevOps Engineer",
        ],
    },
    ThemeCategory {
        name: "analytical",
        keywords: &[
            "analyz", "data", "research", "numbers", "logic", "statistics", "math", "pattern",
        ],
        suggestions: &[
            "Data Analyst",
            "Research Scientist",
            "Financial Analyst",
            "Actuary",
        ],
    },
    ThemeCategory {
        name: "social",
        keywords: &[
            "people", "help", "team", "friend", "talk", "community", "volunteer", "listen",
        ],
        suggestions: &["Teacher", "Counselor", "Social Worker", "Community Manager"],
    },
    ThemeCategory {
        name: "organized",
        keywords: &[
            "plan", "organiz", "schedule", "checklist", "structure", "routine", "deadline",
        ],
        suggestions: &[
            "Project Manager",
            "Operations Coordinator",
            "Event Planner",
            "Executive Assistant",
        ],
    },
    ThemeCategory {
        name: "outdoors",
        keywords: &[
            "outdoor", "nature", "hik", "garden", "animal", "environment", "outside", "camping",
        ],
        suggestions: &[
            "Environmental Scientist",
            "Park Ranger",
            "Landscape Architect",
            "Field Biologist",
        ],
    },
    ThemeCategory {
        name: "detail",
        keywords: &[
            "detail", "precise", "careful", "accura", "thorough", "meticulous", "proofread",
        ],
        suggestions: &[
            "Quality Assurance Analyst",
            "Editor",
            "Accountant",
            "Laboratory Technician",
        ],
    },
    ThemeCategory {
        name: "leadership",
        keywords: &[
            "lead", "mentor", "coordinate", "responsib", "initiative", "decision", "delegate",
        ],
        suggestions: &[
            "Team Lead",
            "Product Manager",
            "Entrepreneur",
            "Program Director",
        ],
    },
    ThemeCategory {
        name: "independent",
        keywords: &[
            "alone", "independent", "myself", "own pace", "solo", "autonomy", "self-directed",
        ],
        suggestions: &[
            "Freelance Writer",
            "Consultant",
            "Researcher",
            "Software Engineer",
        ],
    },
];

pub const POSITIVE_WORDS: &[&str] = &[
    "happy", "excited", "love", "enjoy", "great", "fun", "proud", "energized", "grateful",
    "confident", "motivated",
];

pub const NEGATIVE_WORDS: &[&str] = &[
    "sad", "stress", "anxious", "tired", "frustrat", "worried", "overwhelm", "bored", "afraid",
    "stuck", "drained",
];

pub const CHALLENGE_WORDS: &[&str] = &[
    "challenge", "difficult", "struggle", "hard time", "obstacle", "setback",
];

/// Substituted when the keyword scan detects no themes at all.
pub const GENERIC_SUGGESTIONS: [&str; 5] = [
    "Project Coordinator",
    "Customer Success Manager",
    "Administrative Specialist",
    "Marketing Assistant",
    "Operations Analyst",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_nine_categories() {
        assert_eq!(THEME_CATEGORIES.len(), 9);
    }

    #[test]
    fn test_category_names_are_unique_and_populated() {
        let mut names: Vec<&str> = THEME_CATEGORIES.iter().map(|c| c.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), THEME_CATEGORIES.len());

        for category in THEME_CATEGORIES {
            assert!(category.keywords.len() >= 5, "{} too sparse", category.name);
            assert!(!category.suggestions.is_empty());
        }
    }

    #[test]
    fn test_keywords_are_lowercase() {
        for category in THEME_CATEGORIES {
            for keyword in category.keywords {
                assert_eq!(*keyword, keyword.to_lowercase());
            }
        }
    }

    #[test]
    fn test_generic_fallback_has_five_entries() {
        assert_eq!(GENERIC_SUGGESTIONS.len(), 5);
    }
}
