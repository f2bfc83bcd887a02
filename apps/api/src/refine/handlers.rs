//! Axum route handler for prompt refinement.

use axum::{extract::rejection::JsonRejection, extract::State, Json};

use crate::errors::AppError;
use crate::models::prompt::GeneratedPrompt;
use crate::state::AppState;

/// POST /api/prompt/refine
///
/// Sends a previously generated prompt through the refiner. On failure the
/// caller still holds its original prompt; nothing is persisted here.
pub async fn handle_refine(
    State(state): State<AppState>,
    payload: Result<Json<GeneratedPrompt>, JsonRejection>,
) -> Result<Json<GeneratedPrompt>, AppError> {
    let Json(prompt) = payload?;

    if prompt.system_prompt.trim().is_empty() {
        return Err(AppError::Validation(
            "systemPrompt cannot be empty".to_string(),
        ));
    }

    let refined = state
        .refiner
        .refine(&prompt)
        .await
        .map_err(|e| AppError::Refinement(e.to_string()))?;

    Ok(Json(refined))
}
