use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub openai_api_key: String,
    pub summary_api_url: Option<String>,
    pub summary_api_key: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite:pitchforge.db?mode=rwc".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8183".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            openai_api_key: env::var("OPENAI_API_KEY")
                .context("OPENAI_API_KEY must be set")?,
            summary_api_url: env::var("SUMMARY_API_URL").ok(),
            summary_api_key: env::var("SUMMARY_API_KEY").ok(),
        })
    }
}
