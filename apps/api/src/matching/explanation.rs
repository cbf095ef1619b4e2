//! Explanation Generator — deterministic natural-language rendering of a
//! score and mismatch flag. Never returns an empty string.

use crate::models::profile::Theme;

/// Renders the user-facing explanation for a scored match.
///
/// Mismatch cases take precedence over score bands: a flagged mismatch below
/// 30 reads as a major mismatch, at or above 30 as partial alignment. The
/// remaining bands are ≥80 excellent, ≥60 good, ≥40 moderate, else limited.
pub fn render(
    themes: &[Theme],
    career_title: &str,
    score: i32,
    mismatch: bool,
    career_cluster: Option<&str>,
) -> String {
    let theme_list = describe_themes(themes);

    if mismatch && score < 30 {
        return format!(
            "This looks like a major mismatch. Your profile centers on {theme_list}, \
            while {career_title} pulls in a very different direction. That doesn't \
            make it impossible, but it would mean building an interest base from \
            scratch rather than building on what already drives you."
        );
    }

    if mismatch {
        return format!(
            "There's partial alignment here. {career_title} sits outside the core of \
            your profile ({theme_list}), but enough of your strengths carry over that \
            a hybrid path could work if this career genuinely attracts you."
        );
    }

    if score >= 80 {
        format!(
            "Excellent Match! Your profile themes ({theme_list}) line up strongly \
            with what {career_title} demands day to day. This is the kind of fit \
            worth pursuing seriously."
        )
    } else if score >= 60 {
        format!(
            "Good Match. Your interests in {theme_list} cover much of what \
            {career_title} asks for, with room to grow into the rest. A focused \
            skill-building plan would close the gap quickly."
        )
    } else if score >= 40 {
        let cluster_clause = match career_cluster {
            Some(cluster) => format!(" within the {cluster} field"),
            None => String::new(),
        };
        format!(
            "Moderate Match. Parts of your profile ({theme_list}) connect to \
            {career_title}, but the overlap is incomplete. Exploring adjacent \
            roles{cluster_clause} may reveal a stronger fit."
        )
    } else {
        format!(
            "Limited match. Based on {theme_list}, {career_title} doesn't play to \
            your current strengths. Your profile suggests other directions would \
            reward your energy better."
        )
    }
}

/// Comma-joined theme list, or a generic phrase when no themes were detected.
fn describe_themes(themes: &[Theme]) -> String {
    if themes.is_empty() {
        return "diverse interests".to_string();
    }
    themes
        .iter()
        .map(Theme::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
