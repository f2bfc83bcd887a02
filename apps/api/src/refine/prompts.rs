// LLM prompt text for the refinement pass.

/// System message for refinement — enforces JSON-only output.
pub const REFINE_SYSTEM: &str = "You are a helpful assistant that outputs strictly valid JSON \
    according to the user's instructions.";

/// Builds the refinement instruction around the current prompt pair.
///
/// Filled in one pass so that placeholder-looking text inside either prompt is
/// never substituted a second time.
pub fn build_refine_instruction(system_prompt: &str, user_prompt: &str) -> String {
    format!(
        r#"You are a world-class prompt engineer. Refine and improve the following LLM prompt.

Current system prompt:
---
{system_prompt}
---

Current user prompt:
---
{user_prompt}
---

Requirements:
- Make the system prompt clearer, more concise, and robust.
- Preserve all important constraints and intent.
- Improve structure with sections and bullet points where helpful.
- Do NOT reference specific API providers (OpenAI, etc.).
- Return ONLY valid JSON with exactly these keys: "systemPrompt" and "userPrompt"
- If the prompt requires code then add coding instructions to the system prompt.

Provide the refined prompt in the following JSON format.

Example JSON:
{{
  "systemPrompt": "string",
  "userPrompt": "string"
}}

Now output only the JSON, nothing else."#
    )
}
