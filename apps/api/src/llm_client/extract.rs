//! Defensive extraction of JSON payloads from raw model output.
//!
//! Models wrap JSON in markdown fences and leading prose often enough that
//! every caller goes through these helpers instead of parsing the reply
//! directly. The helpers only locate a candidate substring; `serde_json`
//! remains the arbiter of validity.

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
pub fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}

/// Returns the first balanced JSON object or array substring, whichever
/// opens earliest in the text. `None` if no balanced payload exists.
pub fn first_json_payload(text: &str) -> Option<&str> {
    let object_start = text.find('{');
    let array_start = text.find('[');

    match (object_start, array_start) {
        (Some(o), Some(a)) if a < o => first_balanced(text, a, '[', ']')
            .or_else(|| first_balanced(text, o, '{', '}')),
        (Some(o), a) => first_balanced(text, o, '{', '}')
            .or_else(|| a.and_then(|a| first_balanced(text, a, '[', ']'))),
        (None, Some(a)) => first_balanced(text, a, '[', ']'),
        (None, None) => None,
    }
}

/// Returns the first balanced JSON array substring, or `None`.
/// Used when the caller expects a list (e.g. theme labels) and must not be
/// satisfied by a stray object earlier in the reply.
pub fn first_json_array(text: &str) -> Option<&str> {
    text.find('[').and_then(|start| first_balanced(text, start, '[', ']'))
}

/// Scans forward from `start` for the matching close delimiter, tracking
/// string literals and escapes so braces inside strings don't count.
fn first_balanced(text: &str, start: usize, open: char, close: char) -> Option<&str> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (i, c) in text[start..].char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }

        match c {
            '"' => in_string = true,
            c if c == open => depth += 1,
            c if c == close => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..start + i + c.len_utf8()]);
                }
            }
            _ => {}
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_json_fences_with_json_tag() {
        let input = "```json\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_without_tag() {
        let input = "```\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_no_fences() {
        let input = "{\"key\": \"value\"}";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_first_payload_skips_leading_prose() {
        let input = "Here are your scores:\n{\"overall\": 80} — good luck!";
        assert_eq!(first_json_payload(input), Some("{\"overall\": 80}"));
    }

    #[test]
    fn test_first_payload_handles_nested_objects() {
        let input = "x {\"a\": {\"b\": [1, 2]}, \"c\": 3} y";
        assert_eq!(
            first_json_payload(input),
            Some("{\"a\": {\"b\": [1, 2]}, \"c\": 3}")
        );
    }

    #[test]
    fn test_first_payload_ignores_braces_inside_strings() {
        let input = "{\"note\": \"unbalanced } brace\", \"n\": 1}";
        assert_eq!(first_json_payload(input), Some(input));
    }

    #[test]
    fn test_first_payload_prefers_earliest_delimiter() {
        let input = "[1, 2] then {\"a\": 1}";
        assert_eq!(first_json_payload(input), Some("[1, 2]"));
    }

    #[test]
    fn test_first_payload_none_for_unbalanced_input() {
        assert_eq!(first_json_payload("{\"a\": 1"), None);
        assert_eq!(first_json_payload("no json here"), None);
    }

    #[test]
    fn test_first_array_skips_earlier_object() {
        let input = "{\"meta\": true} [\"Tech\", \"Arts\"]";
        assert_eq!(first_json_array(input), Some("[\"Tech\", \"Arts\"]"));
    }

    #[test]
    fn test_first_array_none_when_absent() {
        assert_eq!(first_json_array("{\"only\": \"object\"}"), None);
    }
}
