//! Local Heuristic Scorer — deterministic base compatibility score from user
//! themes and a career identifier.
//!
//! The rule tables are declarative data, not control flow: exact-title rules
//! first, then title-keyword rules, then a cluster adjustment. The result is
//! clamped to [10,95] rather than [0,100] so heuristic scores stay
//! distinguishable from AI-sourced perfect/zero scores.

use crate::models::profile::Theme;

/// Floor and ceiling for heuristic scores.
pub const MIN_SCORE: i32 = 10;
pub const MAX_SCORE: i32 = 95;

const BASELINE: i32 = 50;
const REQUIRED_THEME_BONUS: i32 = 25;
const INCOMPATIBLE_THEME_PENALTY: i32 = 30;
const KEYWORD_BOOST: i32 = 30;
const KEYWORD_PENALTY: i32 = 20;
const CLUSTER_ALIGNED_BONUS: i32 = 20;
const CLUSTER_OPPOSED_PENALTY: i32 = 15;

/// Exact-title rule: required themes add, incompatible themes subtract.
struct CareerThemeRule {
    title: &'static str,
    required: &'static [Theme],
    incompatible: &'static [Theme],
}

const CAREER_THEME_RULES: &[CareerThemeRule] = &[
    CareerThemeRule {
        title: "Software Engineer",
        required: &[Theme::Tech],
        incompatible: &[Theme::Arts, Theme::Music],
    },
    CareerThemeRule {
        title: "Data Scientist",
        required: &[Theme::Tech, Theme::Science],
        incompatible: &[Theme::Arts],
    },
    CareerThemeRule {
        title: "Physicist",
        required: &[Theme::Physics, Theme::Science],
        incompatible: &[Theme::Arts, Theme::Music],
    },
    CareerThemeRule {
        title: "Chemist",
        required: &[Theme::Chemistry, Theme::Science],
        incompatible: &[Theme::Arts, Theme::Music],
    },
    CareerThemeRule {
        title: "Musician",
        required: &[Theme::Music, Theme::Arts],
        incompatible: &[Theme::Physics, Theme::Chemistry],
    },
    CareerThemeRule {
        title: "Graphic Designer",
        required: &[Theme::Arts],
        incompatible: &[Theme::Physics, Theme::Chemistry],
    },
    CareerThemeRule {
        title: "Teacher",
        required: &[Theme::Education],
        incompatible: &[],
    },
    CareerThemeRule {
        title: "Nurse",
        required: &[Theme::Healthcare],
        incompatible: &[],
    },
    CareerThemeRule {
        title: "Marketing Manager",
        required: &[Theme::Business],
        incompatible: &[],
    },
];

/// Substring rule applied when no exact-title rule matches. The first rule
/// whose keyword appears in the title wins.
struct TitleKeywordRule {
    keywords: &'static [&'static str],
    boost: &'static [Theme],
    penalty: &'static [Theme],
}

const TITLE_KEYWORD_RULES: &[TitleKeywordRule] = &[
    TitleKeywordRule {
        keywords: &["software", "engineer", "developer"],
        boost: &[Theme::Tech],
        penalty: &[Theme::Music, Theme::Arts],
    },
    TitleKeywordRule {
        keywords: &["data", "analyst"],
        boost: &[Theme::Tech, Theme::Science],
        penalty: &[Theme::Arts],
    },
    TitleKeywordRule {
        keywords: &["physics", "scientist"],
        boost: &[Theme::Physics, Theme::Science],
        penalty: &[Theme::Music, Theme::Arts],
    },
    TitleKeywordRule {
        keywords: &["chemistry", "lab"],
        boost: &[Theme::Chemistry, Theme::Science],
        penalty: &[Theme::Music, Theme::Arts],
    },
    TitleKeywordRule {
        keywords: &["music", "audio"],
        boost: &[Theme::Music, Theme::Arts],
        penalty: &[Theme::Physics, Theme::Chemistry],
    },
    TitleKeywordRule {
        keywords: &["art", "design"],
        boost: &[Theme::Arts],
        penalty: &[Theme::Physics, Theme::Chemistry],
    },
    TitleKeywordRule {
        keywords: &["business", "marketing", "finance"],
        boost: &[Theme::Business],
        penalty: &[],
    },
];

/// Cluster labels treated as science-leaning vs arts-leaning for the
/// secondary adjustment (and for mismatch detection).
pub const SCIENCE_CLUSTERS: &[&str] = &["science", "technology", "engineering", "research", "stem"];
pub const ARTS_CLUSTERS: &[&str] = &["arts", "design", "music", "creative", "media"];

/// Themes belonging to each cluster group.
pub const HARD_SCIENCE_THEMES: &[Theme] = &[Theme::Physics, Theme::Chemistry, Theme::Science];
pub const ARTS_THEMES: &[Theme] = &[Theme::Music, Theme::Arts];

/// Computes the base compatibility score for a career. Pure and
/// deterministic; output is always within [`MIN_SCORE`, `MAX_SCORE`].
pub fn score(themes: &[Theme], career_title: &str, career_cluster: Option<&str>) -> i32 {
    let mut score = BASELINE;
    let title_lower = career_title.to_lowercase();

    if let Some(rule) = CAREER_THEME_RULES
        .iter()
        .find(|r| r.title.eq_ignore_ascii_case(career_title))
    {
        for theme in rule.required {
            if themes.contains(theme) {
                score += REQUIRED_THEME_BONUS;
            }
        }
        for theme in rule.incompatible {
            if themes.contains(theme) {
                score -= INCOMPATIBLE_THEME_PENALTY;
            }
        }
    } else if let Some(rule) = TITLE_KEYWORD_RULES
        .iter()
        .find(|r| r.keywords.iter().any(|k| title_lower.contains(k)))
    {
        if rule.boost.iter().any(|t| themes.contains(t)) {
            score += KEYWORD_BOOST;
        }
        if rule.penalty.iter().any(|t| themes.contains(t)) {
            score -= KEYWORD_PENALTY;
        }
    }

    if let Some(cluster) = career_cluster {
        score += cluster_adjustment(cluster, themes);
    }

    score.clamp(MIN_SCORE, MAX_SCORE)
}

/// Secondary adjustment from the cluster hint: reward overlap with the
/// cluster's own theme group, penalize overlap with the opposing group.
fn cluster_adjustment(cluster: &str, themes: &[Theme]) -> i32 {
    let cluster_lower = cluster.to_lowercase();
    let has_science = HARD_SCIENCE_THEMES.iter().any(|t| themes.contains(t));
    let has_arts = ARTS_THEMES.iter().any(|t| themes.contains(t));

    let mut adjustment = 0;
    if SCIENCE_CLUSTERS.iter().any(|c| cluster_lower.contains(c)) {
        if has_science {
            adjustment += CLUSTER_ALIGNED_BONUS;
        }
        if has_arts {
            adjustment -= CLUSTER_OPPOSED_PENALTY;
        }
    } else if ARTS_CLUSTERS.iter().any(|c| cluster_lower.contains(c)) {
        if has_arts {
            adjustment += CLUSTER_ALIGNED_BONUS;
        }
        if has_science {
            adjustment -= CLUSTER_OPPOSED_PENALTY;
        }
    }
    adjustment
}
