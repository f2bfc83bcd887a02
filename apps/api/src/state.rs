use std::sync::Arc;

use crate::refine::PromptRefiner;

/// Shared application state injected into route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable refiner. Default: `LlmRefiner` over the configured model.
    pub refiner: Arc<dyn PromptRefiner>,
}
