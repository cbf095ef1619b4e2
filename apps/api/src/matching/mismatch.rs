//! Mismatch Detector — flags strong thematic incompatibility between a
//! user's themes and a target career.
//!
//! Title-substring checks take precedence over cluster checks. Two theme
//! groups drive the rule: hard-science {Physics, Chemistry, Science} and
//! arts {Music, Arts}.

use crate::matching::scorer::{ARTS_CLUSTERS, ARTS_THEMES, HARD_SCIENCE_THEMES, SCIENCE_CLUSTERS};
use crate::models::profile::Theme;

const SCIENCE_TITLE_KEYWORDS: &[&str] = &["physics", "chemistry", "scientist"];
const ARTS_TITLE_KEYWORDS: &[&str] = &["music", "art", "design"];

/// Pure predicate: does this career clash thematically with the user?
pub fn is_mismatch(themes: &[Theme], career_title: &str, career_cluster: Option<&str>) -> bool {
    let title_lower = career_title.to_lowercase();
    let has_science = HARD_SCIENCE_THEMES.iter().any(|t| themes.contains(t));
    let has_arts = ARTS_THEMES.iter().any(|t| themes.contains(t));

    if SCIENCE_TITLE_KEYWORDS.iter().any(|k| title_lower.contains(k)) {
        return has_arts;
    }
    if ARTS_TITLE_KEYWORDS.iter().any(|k| title_lower.contains(k)) {
        return has_science;
    }

    if let Some(cluster) = career_cluster {
        let cluster_lower = cluster.to_lowercase();
        if SCIENCE_CLUSTERS.iter().any(|c| cluster_lower.contains(c)) {
            return has_arts;
        }
        if ARTS_CLUSTERS.iter().any(|c| cluster_lower.contains(c)) {
            return has_science;
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_science_title_vs_arts_themes_is_mismatch() {
        assert!(is_mismatch(&[Theme::Arts], "Physicist", None));
        assert!(is_mismatch(&[Theme::Music], "Research Scientist", None));
    }

    #[test]
    fn test_science_title_vs_science_themes_is_not_mismatch() {
        // Symmetry check: same title, matching themes
        assert!(!is_mismatch(&[Theme::Physics], "Physicist", None));
        assert!(!is_mismatch(&[Theme::Science], "Chemistry Teacher", None));
    }

    #[test]
    fn test_arts_title_vs_science_themes_is_mismatch() {
        assert!(is_mismatch(&[Theme::Chemistry], "Music Producer", None));
        assert!(is_mismatch(&[Theme::Physics], "Graphic Designer", None));
    }

    #[test]
    fn test_arts_title_vs_arts_themes_is_not_mismatch() {
        assert!(!is_mismatch(&[Theme::Arts], "Graphic Designer", None));
    }

    #[test]
    fn test_cluster_rule_applies_without_title_keyword() {
        assert!(is_mismatch(&[Theme::Arts], "Zookeeper", Some("Science")));
        assert!(is_mismatch(&[Theme::Physics], "Zookeeper", Some("Creative")));
        assert!(!is_mismatch(&[Theme::Physics], "Zookeeper", Some("Science")));
    }

    #[test]
    fn test_title_keywords_take_precedence_over_cluster() {
        // Title says arts; an arts cluster must not flip the check to science
        assert!(is_mismatch(
            &[Theme::Chemistry],
            "Sound Design Lead",
            Some("Science")
        ));
        // Title says science; themes are science → no mismatch even with arts cluster
        assert!(!is_mismatch(
            &[Theme::Physics],
            "Physics Tutor",
            Some("Arts")
        ));
    }

    #[test]
    fn test_neutral_career_and_themes_default_false() {
        assert!(!is_mismatch(&[Theme::Business], "Accountant", None));
        assert!(!is_mismatch(&[], "Physicist", None));
        assert!(!is_mismatch(&[Theme::Tech], "Zookeeper", Some("Culinary")));
    }

    #[test]
    fn test_detector_is_idempotent() {
        let themes = [Theme::Arts];
        assert_eq!(
            is_mismatch(&themes, "Physicist", None),
            is_mismatch(&themes, "Physicist", None)
        );
    }
}
