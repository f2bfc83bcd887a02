//! Axum route handler for prompt generation.

use axum::{extract::rejection::JsonRejection, Json};
use tracing::info;

use crate::composer::compose;
use crate::errors::AppError;
use crate::models::prompt::{GeneratedPrompt, PromptParameters};

/// POST /api/prompt/generate
///
/// Composes a prompt from the submitted parameters. Only structural problems
/// in the body (bad JSON, wrong types, missing keys, unknown tone) are rejected.
pub async fn handle_generate(
    payload: Result<Json<PromptParameters>, JsonRejection>,
) -> Result<Json<GeneratedPrompt>, AppError> {
    let Json(params) = payload?;

    let prompt = compose(&params);
    info!(
        system_prompt_len = prompt.system_prompt.len(),
        allow_tools = params.allow_tools,
        "Prompt composed"
    );

    Ok(Json(prompt))
}
