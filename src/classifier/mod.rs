//! Classifier client
//!
//! Provides a single interface for asking an external model to label a prompt.
//! One call is one billable request: no streaming, no retry.

use async_trait::async_trait;

pub mod gemini;
pub mod prompt;

pub use gemini::GeminiClassifier;
pub use prompt::build_prompt;

/// Error types for the external model call
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("GEMINI_API_KEY not set")]
    MissingApiKey,

    #[error("Network error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Gemini API error: {status} - {body}")]
    Api { status: u16, body: String },

    #[error("Gemini returned no text")]
    EmptyResponse,
}

/// Text in, text out
#[async_trait]
pub trait Classifier: Send + Sync {
    /// Provider name for logs
    fn name(&self) -> &'static str;

    async fn classify(&self, prompt: &str) -> Result<String, ProviderError>;
}
