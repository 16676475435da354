use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Only `PORT` is validated; every other setting is optional.
#[derive(Debug, Clone)]
pub struct Config {
    /// Absent → resumes are kept in memory for the life of the process.
    pub database_url: Option<String>,
    /// Absent → the suggestion proxy is unconfigured.
    pub anthropic_api_key: Option<String>,
    /// Absent → permissive CORS.
    pub cors_origin: Option<String>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: optional_env("DATABASE_URL"),
            anthropic_api_key: optional_env("ANTHROPIC_API_KEY"),
            cors_origin: optional_env("CORS_ORIGIN"),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "5000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Unset and blank variables are both treated as absent.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
