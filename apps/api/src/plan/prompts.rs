// All LLM prompt constants for the plan module.

/// System prompt for plan generation — enforces JSON-only output.
pub const PLAN_SYSTEM: &str = "You are a pragmatic career coach who turns goals \
    into concrete, time-boxed action plans. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Plan generation prompt template.
/// Replace: {career_goal}, {education_level}, {user_details}
pub const PLAN_PROMPT_TEMPLATE: &str = r#"Create a four-phase action plan for someone working toward the career goal below.

Return a JSON object with this EXACT schema (no extra fields):
{
  "timeline": "One sentence summarizing the overall arc of the plan.",
  "phases": [
    {
      "title": "Immediate",
      "duration": "Next 2 weeks",
      "tasks": ["Concrete task one", "Concrete task two"]
    }
  ]
}

Rules:
- Exactly four phases, titled "Immediate", "3-Month", "6-Month", and "1-Year", in that order.
- 3 to 5 tasks per phase; each task is one specific, completable action.
- Calibrate tasks to the stated education level — don't tell a doctorate
  holder to finish high school, and don't assume degrees the person lacks.

CAREER GOAL: {career_goal}
EDUCATION LEVEL: {education_level}

ABOUT THIS PERSON:
{user_details}"#;
