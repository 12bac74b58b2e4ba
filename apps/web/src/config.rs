use anyhow::{Context, Result};

const DEFAULT_ASSISTANT_API_URL: &str = "http://localhost:8000";

/// Application configuration loaded from environment variables.
/// Every variable has a default, so an empty environment yields a local setup.
#[derive(Debug, Clone)]
pub struct Config {
    pub assistant_api_url: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(Config {
            assistant_api_url: lookup("ASSISTANT_API_URL")
                .unwrap_or_else(|| DEFAULT_ASSISTANT_API_URL.to_string()),
            port: lookup("PORT")
                .unwrap_or_else(|| "3000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}
