pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::composer::handlers::handle_generate;
use crate::refine::handlers::handle_refine;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/prompt/generate", post(handle_generate))
        .route("/api/prompt/refine", post(handle_refine))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::models::prompt::GeneratedPrompt;
    use crate::refine::{PromptRefiner, RefineError};

    /// Uppercases the system prompt, or fails when `fail` is set.
    struct StubRefiner {
        fail: bool,
    }

    #[async_trait]
    impl PromptRefiner for StubRefiner {
        async fn refine(&self, prompt: &GeneratedPrompt) -> Result<GeneratedPrompt, RefineError> {
            if self.fail {
                return Err(RefineError::NoJsonObject);
            }
            Ok(GeneratedPrompt {
                system_prompt: prompt.system_prompt.to_uppercase(),
                ..prompt.clone()
            })
        }
    }

    fn app(fail: bool) -> Router {
        build_router(AppState {
            refiner: Arc::new(StubRefiner { fail }),
        })
    }

    fn post_json(uri: &str, body: String) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn coach_body() -> Value {
        json!({
            "useCaseTitle": "Coach",
            "useCaseDescription": "Help with interviews",
            "aiRole": "",
            "audience": "juniors",
            "tone": "friendly",
            "language": "English",
            "depthLevel": 2,
            "reasoningStyle": "chain_of_thought",
            "maxTokens": 500,
            "avoidTopics": ["politics"],
            "mustInclude": [],
            "forbiddenPhrases": [],
            "allowTools": false,
            "toolTypesAllowed": [],
            "useSections": true,
            "includeCitations": false,
            "outputFormat": "markdown",
            "safetyLevel": "default",
            "positiveExamples": [],
            "negativeExamples": []
        })
    }

    #[tokio::test]
    async fn test_health() {
        let request = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(app(false), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "promptgen");
    }

    #[tokio::test]
    async fn test_generate_returns_prompt() {
        let request = post_json("/api/prompt/generate", coach_body().to_string());
        let (status, body) = send(app(false), request).await;

        assert_eq!(status, StatusCode::OK);
        let system = body["systemPrompt"].as_str().unwrap();
        assert!(system.starts_with("You are: a helpful AI assistant.\n\nUse case: Coach."));
        assert!(system.contains("Format the answer as Markdown."));
        assert!(body.get("toolInstructions").is_none());
        assert!(body["notes"].as_str().is_some());
    }

    #[tokio::test]
    async fn test_generate_with_tools_includes_instructions() {
        let mut params = coach_body();
        params["allowTools"] = json!(true);
        params["toolTypesAllowed"] = json!(["web_search", "code_runner"]);
        let request = post_json("/api/prompt/generate", params.to_string());
        let (status, body) = send(app(false), request).await;

        assert_eq!(status, StatusCode::OK);
        assert!(body["toolInstructions"]
            .as_str()
            .unwrap()
            .starts_with("Tool usage:"));
        assert!(body["systemPrompt"]
            .as_str()
            .unwrap()
            .contains("web_search, code_runner"));
    }

    #[tokio::test]
    async fn test_generate_degrades_unknown_values() {
        let mut params = coach_body();
        params["depthLevel"] = json!(9);
        params["reasoningStyle"] = json!("bogus");
        params["outputFormat"] = json!("yaml");
        let request = post_json("/api/prompt/generate", params.to_string());
        let (status, body) = send(app(false), request).await;

        assert_eq!(status, StatusCode::OK);
        let system = body["systemPrompt"].as_str().unwrap();
        assert!(system.contains("Provide a direct answer"));
        assert!(system.contains("Plain text is acceptable."));
    }

    #[tokio::test]
    async fn test_generate_rejects_malformed_json() {
        let request = post_json("/api/prompt/generate", "{not json".to_string());
        let (status, body) = send(app(false), request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_generate_rejects_wrong_types_and_unknown_tone() {
        let mut params = coach_body();
        params["avoidTopics"] = json!("politics");
        let request = post_json("/api/prompt/generate", params.to_string());
        let (status, _) = send(app(false), request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let mut params = coach_body();
        params["tone"] = json!("sarcastic");
        let request = post_json("/api/prompt/generate", params.to_string());
        let (status, body) = send(app(false), request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_refine_success() {
        let prompt = json!({
            "systemPrompt": "be brief",
            "userPrompt": "help",
            "notes": "n"
        });
        let request = post_json("/api/prompt/refine", prompt.to_string());
        let (status, body) = send(app(false), request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["systemPrompt"], "BE BRIEF");
        assert_eq!(body["userPrompt"], "help");
        assert_eq!(body["notes"], "n");
    }

    #[tokio::test]
    async fn test_refine_failure_reports_bad_gateway() {
        let prompt = json!({"systemPrompt": "be brief", "userPrompt": "help"});
        let request = post_json("/api/prompt/refine", prompt.to_string());
        let (status, body) = send(app(true), request).await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["error"]["code"], "REFINEMENT_FAILED");
    }

    #[tokio::test]
    async fn test_refine_rejects_empty_system_prompt() {
        let prompt = json!({"systemPrompt": "   ", "userPrompt": "help"});
        let request = post_json("/api/prompt/refine", prompt.to_string());
        let (status, body) = send(app(false), request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["message"], "systemPrompt cannot be empty");
    }
}
