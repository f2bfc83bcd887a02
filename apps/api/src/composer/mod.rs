//! Prompt composition — turns `PromptParameters` into a `GeneratedPrompt`.
//!
//! Each input field resolves to an optional clause. Present clauses are joined
//! in a fixed order with a blank line between them. Composition is pure: no
//! I/O, no clock, no randomness, and it never fails. Unknown or out-of-range
//! values degrade to a fallback clause or to no clause at all.

pub mod clauses;
pub mod handlers;

use crate::models::prompt::{GeneratedPrompt, PromptParameters, SafetyLevel};

use self::clauses::*;

const PARAGRAPH_SEPARATOR: &str = "\n\n";

/// Composes the system prompt, user prompt, tool instructions and usage notes.
pub fn compose(params: &PromptParameters) -> GeneratedPrompt {
    let system_prompt = system_clauses(params)
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(PARAGRAPH_SEPARATOR);

    GeneratedPrompt {
        system_prompt,
        user_prompt: USER_PROMPT.to_string(),
        tool_instructions: params.allow_tools.then(|| TOOL_INSTRUCTIONS.to_string()),
        notes: Some(USAGE_NOTES.to_string()),
    }
}

/// Resolves every clause of the system prompt in emission order.
/// `None` entries are omitted from the joined output.
fn system_clauses(params: &PromptParameters) -> Vec<Option<String>> {
    let examples = examples_block(params);
    let examples_guidance = examples.as_ref().map(|_| EXAMPLES_GUIDANCE.to_string());

    vec![
        Some(role_clause(&params.ai_role)),
        Some(format!("Use case: {}.", params.use_case_title)),
        Some(format!(
            "Use case description: {}.",
            params.use_case_description
        )),
        Some(format!(
            "Use a {} tone targeted at {}.",
            params.tone, params.audience
        )),
        Some(format!("Respond in {}.", params.language)),
        depth_clause(params.depth_level).map(str::to_string),
        Some(reasoning_clause(params.reasoning_style).to_string()),
        Some(sections_clause(params.use_sections).to_string()),
        Some(format_clause(params.output_format).to_string()),
        Some(tools_clause(params)),
        Some(citations_clause(params.include_citations).to_string()),
        Some(safety_clause(params)),
        non_empty(&params.style_guidelines)
            .map(|s| format!("Additional style guidelines: {s}")),
        list_clause(
            &params.avoid_topics,
            ", ",
            "Avoid discussing these topics unless absolutely necessary: ",
        ),
        list_clause(&params.must_include, "; ", "Ensure the answer includes: "),
        list_clause(
            &params.forbidden_phrases,
            ", ",
            "Do not use the following phrases: ",
        ),
        non_empty(&params.additional_notes).map(|s| format!("Additional project notes: {s}")),
        examples,
        examples_guidance,
        budget_clause(params.max_tokens),
    ]
}

fn role_clause(ai_role: &str) -> String {
    let role = if ai_role.is_empty() {
        DEFAULT_ROLE
    } else {
        ai_role
    };
    format!("You are: {role}")
}

fn sections_clause(use_sections: bool) -> &'static str {
    if use_sections {
        SECTIONS_ON
    } else {
        SECTIONS_OFF
    }
}

fn citations_clause(include_citations: bool) -> &'static str {
    if include_citations {
        CITATIONS_ON
    } else {
        CITATIONS_OFF
    }
}

fn tools_clause(params: &PromptParameters) -> String {
    if params.allow_tools && !params.tool_types_allowed.is_empty() {
        format!(
            "You may use the following tools when helpful: {}. Do not mention tools to the user.",
            params.tool_types_allowed.join(", ")
        )
    } else {
        NO_TOOLS.to_string()
    }
}

fn safety_clause(params: &PromptParameters) -> String {
    match params.safety_level {
        SafetyLevel::Strict => SAFETY_STRICT.to_string(),
        SafetyLevel::Custom => non_empty(&params.custom_safety_notes)
            .unwrap_or(SAFETY_DEFAULT)
            .to_string(),
        SafetyLevel::Default => SAFETY_DEFAULT.to_string(),
    }
}

/// `{prefix}{items joined by separator}.` or `None` for an empty list.
fn list_clause(items: &[String], separator: &str, prefix: &str) -> Option<String> {
    if items.is_empty() {
        return None;
    }
    Some(format!("{prefix}{}.", items.join(separator)))
}

/// Good examples block followed by bad examples block, each numbered from 1.
fn examples_block(params: &PromptParameters) -> Option<String> {
    let blocks: Vec<String> = [
        numbered_examples(&params.positive_examples, GOOD_EXAMPLES_HEADER, "good"),
        numbered_examples(&params.negative_examples, BAD_EXAMPLES_HEADER, "bad"),
    ]
    .into_iter()
    .flatten()
    .collect();

    if blocks.is_empty() {
        None
    } else {
        Some(blocks.join(PARAGRAPH_SEPARATOR))
    }
}

fn numbered_examples(examples: &[String], header: &str, label: &str) -> Option<String> {
    if examples.is_empty() {
        return None;
    }
    let items = examples
        .iter()
        .enumerate()
        .map(|(i, example)| format!("Example {} ({label}):\n{example}", i + 1))
        .collect::<Vec<_>>()
        .join(PARAGRAPH_SEPARATOR);
    Some(format!("{header}\n{items}"))
}

fn budget_clause(max_tokens: Option<u32>) -> Option<String> {
    match max_tokens {
        Some(tokens) if tokens > 0 => Some(format!(
            "Keep the answer within a budget corresponding to approximately {tokens} tokens; \
            prioritize clarity and usefulness."
        )),
        _ => None,
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}
