//! Prompt refinement — a second pass that asks an external LLM to rewrite a
//! composed prompt pair.
//!
//! The model is asked for strict JSON with `systemPrompt` and `userPrompt`.
//! Its reply is free text, so the first balanced `{...}` span is cut out and
//! parsed. Every failure (transport, missing span, wrong shape) is reported as
//! a `RefineError` and never retried here.

pub mod handlers;
pub mod prompts;

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::llm_client::{ChatOptions, LlmClient, LlmError};
use crate::models::prompt::GeneratedPrompt;
use crate::refine::prompts::{build_refine_instruction, REFINE_SYSTEM};

const REFINE_OPTIONS: ChatOptions = ChatOptions {
    temperature: 0.2,
    max_tokens: 1000,
};

#[derive(Debug, Error)]
pub enum RefineError {
    #[error("LLM call failed: {0}")]
    Llm(#[from] LlmError),

    #[error("LLM response contained no JSON object")]
    NoJsonObject,

    #[error("LLM response JSON did not match the expected shape: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

/// Rewrites a composed prompt pair. Swappable so the HTTP layer can be tested
/// without a live model.
#[async_trait]
pub trait PromptRefiner: Send + Sync {
    async fn refine(&self, prompt: &GeneratedPrompt) -> Result<GeneratedPrompt, RefineError>;
}

/// The two keys the model must return.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RefinedPair {
    system_prompt: String,
    user_prompt: String,
}

/// Default refiner backed by the chat-completions client.
pub struct LlmRefiner {
    llm: LlmClient,
}

impl LlmRefiner {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl PromptRefiner for LlmRefiner {
    async fn refine(&self, prompt: &GeneratedPrompt) -> Result<GeneratedPrompt, RefineError> {
        let instruction = build_refine_instruction(&prompt.system_prompt, &prompt.user_prompt);

        let text = self
            .llm
            .chat(REFINE_SYSTEM, &instruction, REFINE_OPTIONS)
            .await?;
        debug!(response_len = text.len(), "Refinement response received");

        let span = extract_json_object(&text).ok_or(RefineError::NoJsonObject)?;
        let refined: RefinedPair = serde_json::from_str(span)?;

        info!(
            before = prompt.system_prompt.len(),
            after = refined.system_prompt.len(),
            "Prompt refined"
        );

        Ok(GeneratedPrompt {
            system_prompt: refined.system_prompt,
            user_prompt: refined.user_prompt,
            tool_instructions: prompt.tool_instructions.clone(),
            notes: prompt.notes.clone(),
        })
    }
}

/// Returns the first balanced `{...}` span in `text`, starting at the first
/// `{`. Braces inside JSON string literals do not count toward nesting.
pub fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, ch) in text[start..].char_indices() {
        if in_string {
            match ch {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match ch {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..start + offset + 1]);
                }
            }
            _ => {}
        }
    }
    None
}
