// Fixed clause texts and lookup tables for prompt composition.
// Each lookup has an explicit fallback so every row can be tested on its own.

use crate::models::prompt::{OutputFormat, ReasoningStyle};

pub const DEFAULT_ROLE: &str = "a helpful AI assistant.";

/// Depth clauses indexed by `depthLevel - 1`.
pub const DEPTH_CLAUSES: [&str; 5] = [
    "Provide a brief, high-level answer.",
    "Provide a concise but reasonably detailed answer.",
    "Provide a moderately detailed, structured answer.",
    "Provide a detailed, well-structured answer with explanations.",
    "Provide an exhaustive, deeply detailed answer with step-by-step reasoning where useful.",
];

pub const SECTIONS_ON: &str =
    "Organize the answer into clear sections with headings where appropriate.";
pub const SECTIONS_OFF: &str = "A structured answer is good, but headings are optional.";

pub const NO_TOOLS: &str =
    "Do not rely on external tools; answer using your internal knowledge and reasoning.";

pub const CITATIONS_ON: &str = "When you reference external facts, mention the source at a high level without URLs unless asked.";
pub const CITATIONS_OFF: &str = "No citations are strictly required unless the user asks for them.";

pub const SAFETY_STRICT: &str = "Avoid any harmful, unsafe, or sensitive content. \
    If asked for such content, refuse and gently redirect.";
pub const SAFETY_DEFAULT: &str = "Follow standard safety and content guidelines.";

pub const GOOD_EXAMPLES_HEADER: &str = "Here are examples of good answers:";
pub const BAD_EXAMPLES_HEADER: &str =
    "Here are examples of bad answers you must avoid reproducing:";
pub const EXAMPLES_GUIDANCE: &str =
    "Follow the intent of the good examples and avoid the patterns in the bad examples.";

pub const USER_PROMPT: &str = "User request: Please assist with the following task in the context of the described use case.";

pub const TOOL_INSTRUCTIONS: &str = "Tool usage: You may internally call allowed tools to gather information or run code. \
    Never mention tools, API keys, or internal mechanisms to the end user.";

pub const USAGE_NOTES: &str = "Use systemPrompt as system message, userPrompt as user message, \
    then append the user's actual query.";

/// Returns the depth clause for a 1-based level, or `None` when out of range.
pub fn depth_clause(level: i64) -> Option<&'static str> {
    let index = usize::try_from(level.checked_sub(1)?).ok()?;
    DEPTH_CLAUSES.get(index).copied()
}

pub fn reasoning_clause(style: ReasoningStyle) -> &'static str {
    match style {
        ReasoningStyle::ChainOfThought => "Think step by step and explain your reasoning before giving the final answer, but keep it concise.",
        ReasoningStyle::Socratic => {
            "Guide the user using questions and answers to help them reach understanding."
        }
        ReasoningStyle::ExamplesFirst => {
            "Use concrete examples early in the response, then generalize."
        }
        ReasoningStyle::DirectAnswer => {
            "Provide a direct answer without exposing unnecessary internal reasoning."
        }
    }
}

pub fn format_clause(format: OutputFormat) -> &'static str {
    match format {
        OutputFormat::Markdown => "Format the answer as Markdown.",
        OutputFormat::Json => {
            "Return the answer strictly as valid JSON that matches the requested schema."
        }
        OutputFormat::Code => "Focus on code blocks and minimal explanatory text.",
        OutputFormat::StepByStep => "Structure the answer as a step-by-step list of actions.",
        OutputFormat::PlainText => "Plain text is acceptable.",
    }
}
