//! Prompts sent to the completion service.

/// Fixed instructions describing the six-field output schema.
pub const SYSTEM_PROMPT: &str = r#"You are the Smart Insights Engine for a productivity application.

You will receive a JSON payload containing user-generated content such as tasks, notes, items, or entries.

Your job:
1. Summarize the content in 3-4 crisp bullet points.
2. Identify issues, inconsistencies, or missing elements.
3. Suggest improvements.
4. Suggest next steps the user should take.
5. Generate a priority breakdown (High, Medium, Low).
6. Give 3 alternate, improved versions of the content (rewrites).
7. Output ONLY valid JSON with the following schema (no markdown, no code blocks):

{
  "summary": [],
  "issues_detected": [],
  "recommendations": [],
  "next_steps": [],
  "priority_breakdown": {
    "high": [],
    "medium": [],
    "low": []
  },
  "alternate_versions": []
}"#;

/// User message embedding the pretty-printed content.
pub fn user_prompt(content: &serde_json::Value) -> String {
    let pretty = serde_json::to_string_pretty(content).unwrap_or_else(|_| content.to_string());
    format!(
        "Analyze the following workspace data and provide insights:\n\n{pretty}\n\n\
         Respond with ONLY valid JSON, no markdown formatting."
    )
}
