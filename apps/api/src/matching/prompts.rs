// All LLM prompt constants for the matching module.
// Reuses cross-cutting fragments from llm_client::prompts.

/// System prompt for theme extraction — enforces JSON-array-only output.
pub const THEME_EXTRACTION_SYSTEM: &str =
    "You are a career-profile analyst. \
    You classify free-text self-descriptions into a fixed set of theme labels. \
    You MUST respond with a valid JSON array of strings only. \
    Do NOT include any text outside the JSON array. \
    Do NOT use markdown code fences. \
    Do NOT invent labels outside the allowed vocabulary.";

/// Theme extraction prompt template. Replace `{narrative}` before sending.
pub const THEME_EXTRACTION_PROMPT_TEMPLATE: &str = r#"Identify which of the following themes are clearly present in this person's self-description.

ALLOWED THEMES (use these exact labels, no others):
["Tech", "Arts", "Science", "Business", "Healthcare", "Education", "Physics", "Chemistry", "Music"]

Return a JSON array containing only the labels that apply, e.g. ["Tech", "Science"].
Return [] if none clearly apply. Do not stretch weak signals into labels.

SELF-DESCRIPTION:
{narrative}"#;

/// System prompt for AI compatibility scoring — enforces JSON-only output.
pub const MATCH_SCORING_SYSTEM: &str =
    "You are an expert career counselor scoring how well a person's profile \
    fits a specific career. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies outside the JSON.";

/// AI scoring prompt template.
/// Replace: {narrative}, {career_title}, {career_details}, {career_cluster}
pub const MATCH_SCORING_PROMPT_TEMPLATE: &str = r#"Score how well this person's profile fits the career below.

Return a JSON object with this EXACT schema (no extra fields):
{
  "overall_score": 72,
  "skill_match": 68,
  "interest_match": 80,
  "value_alignment": 70,
  "explanation": "Two to four sentences grounded in the profile, naming the career."
}

Rules for scoring:
- Every score is an integer from 0 to 100.
- Scores must reflect THIS profile against THIS career. Do not return a
  neutral 50 when uncertain — commit to a direction based on the evidence.
- overall_score weighs skills, interests, and values together; it is not
  required to be their average.
- The explanation must reference concrete details from the profile.

CAREER: {career_title}
CLUSTER: {career_cluster}
CAREER DETAILS:
{career_details}

PROFILE:
{narrative}"#;
