// src/recommend.rs
// One classification round trip: prompt -> model -> normalized vibe

use std::sync::Arc;
use tracing::{error, info};

use crate::classifier::{build_prompt, Classifier, ProviderError};
use crate::vibes::{normalize, normalize_key, CategoryStore, ClassificationResult};

#[derive(Debug, thiserror::Error)]
pub enum RecommendError {
    #[error("empty input text")]
    EmptyInput,

    #[error(transparent)]
    Provider(#[from] ProviderError),
}

/// Shared by every request; holds no mutable state
#[derive(Clone)]
pub struct Recommender {
    store: Arc<CategoryStore>,
    classifier: Arc<dyn Classifier>,
}

impl Recommender {
    pub fn new(store: Arc<CategoryStore>, classifier: Arc<dyn Classifier>) -> Self {
        Self { store, classifier }
    }

    pub fn store(&self) -> &CategoryStore {
        &self.store
    }

    /// Classify `text` with exactly one model call.
    ///
    /// Only a literally empty string is rejected; whitespace still goes to the model.
    pub async fn recommend(&self, text: &str) -> Result<ClassificationResult, RecommendError> {
        if text.is_empty() {
            return Err(RecommendError::EmptyInput);
        }

        info!("Received: {}", text);

        let keys: Vec<&str> = self.store.keys().collect();
        let prompt = build_prompt(text, &keys);

        let raw = self.classifier.classify(&prompt).await.map_err(|e| {
            error!("{} classification failed: {}", self.classifier.name(), e);
            e
        })?;

        info!("Classified as: {}", normalize_key(&raw));
        Ok(normalize(&raw, &self.store))
    }
}
