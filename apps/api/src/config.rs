use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Only the database URL is required; the model endpoint falls back to its
/// hosted defaults when unset.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub oss_base_url: String,
    pub oss_api_key: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            oss_base_url: std::env::var("OSS_BASE_URL")
                .unwrap_or_else(|_| "https://ai.megallm.io/v1".to_string()),
            oss_api_key: std::env::var("OSS_API_KEY").unwrap_or_default(),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
