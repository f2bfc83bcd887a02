use anyhow::{Context, Result};

pub const DEFAULT_MODEL: &str = "Qwen/Qwen3-4B-Instruct-2507:nscale";
pub const DEFAULT_LLM_BASE_URL: &str = "https://router.huggingface.co/v1";

/// Application configuration loaded from environment variables.
/// Every variable has a default; only a malformed `PORT` fails startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Bearer token for the refinement model. Empty means refinement requests
    /// will fail authentication upstream.
    pub hf_token: String,
    pub hf_model: String,
    pub llm_base_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "4000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
            hf_token: std::env::var("HF_TOKEN").unwrap_or_default(),
            hf_model: env_or("HF_MODEL", DEFAULT_MODEL),
            llm_base_url: env_or("LLM_BASE_URL", DEFAULT_LLM_BASE_URL),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key)
        .ok()
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}
