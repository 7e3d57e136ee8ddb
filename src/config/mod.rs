// src/config/mod.rs
// Runtime configuration: CLI flags, falling back to environment (and .env), then defaults

use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

use crate::classifier::gemini::{DEFAULT_API_BASE, DEFAULT_MODEL};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} not set; classification requests will fail until it is configured")]
    MissingCredential(&'static str),
}

#[derive(Debug, Clone, Parser)]
#[command(name = "vibes")]
#[command(about = "Classifies free text into a vibe and recommends a playlist")]
pub struct Config {
    /// Address to bind
    #[arg(long, env = "VIBES_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to bind
    #[arg(long, env = "VIBES_PORT", default_value_t = 5000)]
    pub port: u16,

    /// Category dataset (JSON object of key -> {message, title, url})
    #[arg(long = "data", env = "VIBES_DATA_PATH", default_value = "data/vibes_db.json")]
    pub data_path: PathBuf,

    /// Gemini API key
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    pub gemini_api_key: Option<String>,

    /// Gemini model used for classification
    #[arg(long, env = "GEMINI_MODEL", default_value = DEFAULT_MODEL)]
    pub gemini_model: String,

    /// Gemini API base URL
    #[arg(long, env = "GEMINI_API_BASE", default_value = DEFAULT_API_BASE)]
    pub gemini_api_base: String,

    /// Upper bound on a single classification call, in seconds (no bound if unset)
    #[arg(long, env = "CLASSIFIER_TIMEOUT_SECS")]
    pub classifier_timeout_secs: Option<u64>,
}

impl Config {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn classifier_timeout(&self) -> Option<Duration> {
        self.classifier_timeout_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }

    /// Checks that only produce warnings; nothing here stops startup
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.gemini_api_key.as_deref().map(str::trim) {
            Some(key) if !key.is_empty() => Ok(()),
            _ => Err(ConfigError::MissingCredential("GEMINI_API_KEY")),
        }
    }
}
