use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Number;
use tracing::warn;

/// Tone requested for the downstream model. Closed set: unknown values are
/// rejected at deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(test, derive(Default))]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Formal,
    Informal,
    #[cfg_attr(test, default)]
    Neutral,
    Friendly,
    Authoritative,
    Playful,
}

impl Tone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Formal => "formal",
            Tone::Informal => "informal",
            Tone::Neutral => "neutral",
            Tone::Friendly => "friendly",
            Tone::Authoritative => "authoritative",
            Tone::Playful => "playful",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the downstream model should expose its reasoning.
///
/// Accepts any string or null: unrecognized tags fall back to `DirectAnswer`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "Option<String>")]
pub enum ReasoningStyle {
    #[default]
    DirectAnswer,
    ChainOfThought,
    Socratic,
    ExamplesFirst,
}

impl From<Option<String>> for ReasoningStyle {
    fn from(value: Option<String>) -> Self {
        match value.as_deref() {
            None | Some("direct_answer") => ReasoningStyle::DirectAnswer,
            Some("chain_of_thought") => ReasoningStyle::ChainOfThought,
            Some("socratic") => ReasoningStyle::Socratic,
            Some("examples_first") => ReasoningStyle::ExamplesFirst,
            Some(other) => {
                warn!(value = %other, "Unknown reasoningStyle, falling back to direct_answer");
                ReasoningStyle::DirectAnswer
            }
        }
    }
}

/// Output shape the downstream model should produce.
///
/// Accepts any string or null: unrecognized tags fall back to `PlainText`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "Option<String>")]
pub enum OutputFormat {
    #[default]
    PlainText,
    Markdown,
    Json,
    Code,
    StepByStep,
}

impl From<Option<String>> for OutputFormat {
    fn from(value: Option<String>) -> Self {
        match value.as_deref() {
            None | Some("plain_text") => OutputFormat::PlainText,
            Some("markdown") => OutputFormat::Markdown,
            Some("json") => OutputFormat::Json,
            Some("code") => OutputFormat::Code,
            Some("step_by_step") => OutputFormat::StepByStep,
            Some(other) => {
                warn!(value = %other, "Unknown outputFormat, falling back to plain_text");
                OutputFormat::PlainText
            }
        }
    }
}

/// Safety posture. `Custom` only takes effect together with non-empty
/// `customSafetyNotes`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "Option<String>")]
pub enum SafetyLevel {
    #[default]
    Default,
    Strict,
    Custom,
}

impl From<Option<String>> for SafetyLevel {
    fn from(value: Option<String>) -> Self {
        match value.as_deref() {
            None | Some("default") => SafetyLevel::Default,
            Some("strict") => SafetyLevel::Strict,
            Some("custom") => SafetyLevel::Custom,
            Some(other) => {
                warn!(value = %other, "Unknown safetyLevel, falling back to default");
                SafetyLevel::Default
            }
        }
    }
}

/// Input to prompt composition, decoded from the generate request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(test, derive(Default))]
#[serde(rename_all = "camelCase")]
pub struct PromptParameters {
    pub use_case_title: String,
    pub use_case_description: String,
    /// Empty means the default assistant role is used.
    pub ai_role: String,
    pub audience: String,
    pub tone: Tone,
    pub language: String,
    #[serde(default)]
    pub style_guidelines: Option<String>,
    /// 1 (brief) to 5 (exhaustive). Anything else emits no depth clause.
    #[serde(deserialize_with = "deserialize_depth_level")]
    pub depth_level: i64,
    #[serde(default)]
    pub reasoning_style: ReasoningStyle,
    /// `None` or zero means no token budget clause.
    #[serde(default)]
    pub max_tokens: Option<u32>,
    #[serde(default)]
    pub avoid_topics: Vec<String>,
    #[serde(default)]
    pub must_include: Vec<String>,
    #[serde(default)]
    pub forbidden_phrases: Vec<String>,
    #[serde(default)]
    pub allow_tools: bool,
    #[serde(default)]
    pub tool_types_allowed: Vec<String>,
    #[serde(default)]
    pub use_sections: bool,
    #[serde(default)]
    pub include_citations: bool,
    #[serde(default)]
    pub output_format: OutputFormat,
    #[serde(default)]
    pub safety_level: SafetyLevel,
    #[serde(default)]
    pub custom_safety_notes: Option<String>,
    #[serde(default)]
    pub positive_examples: Vec<String>,
    #[serde(default)]
    pub negative_examples: Vec<String>,
    #[serde(default)]
    pub additional_notes: Option<String>,
}

/// Reads `depthLevel` from any JSON number. Integral floats such as `2.0`
/// keep their value; fractions and integers beyond `i64` become 0, which
/// maps to no depth clause.
fn deserialize_depth_level<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let number = Number::deserialize(deserializer)?;
    if let Some(level) = number.as_i64() {
        return Ok(level);
    }
    match number
        .as_f64()
        .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64)
    {
        Some(level) => Ok(level as i64),
        None => {
            warn!(value = %number, "depthLevel is not a representable integer, omitting depth clause");
            Ok(0)
        }
    }
}

/// A composed system/user prompt pair. Also the request and response body of
/// the refine endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedPrompt {
    pub system_prompt: String,
    pub user_prompt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_instructions: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
