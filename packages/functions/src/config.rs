use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use summarization::DEFAULT_MODEL_ID;

/// Function configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Bucket the result records are written to
    pub output_bucket: String,
    /// Model invoked for both generation calls
    pub model_id: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            output_bucket: env::var("OUTPUT_BUCKET").context("OUTPUT_BUCKET must be set")?,
            model_id: env::var("MODEL_ID").unwrap_or_else(|_| DEFAULT_MODEL_ID.to_string()),
        })
    }
}
