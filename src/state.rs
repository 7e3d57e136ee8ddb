// src/state.rs

use std::sync::Arc;

use crate::classifier::{Classifier, GeminiClassifier};
use crate::config::Config;
use crate::recommend::Recommender;
use crate::vibes::CategoryStore;

/// Application state shared by all handlers
#[derive(Clone)]
pub struct AppState {
    pub recommender: Recommender,
}

impl AppState {
    pub fn new(store: CategoryStore, classifier: Arc<dyn Classifier>) -> Self {
        Self {
            recommender: Recommender::new(Arc::new(store), classifier),
        }
    }

    /// Load the dataset and build the Gemini client described by `config`
    pub fn from_config(config: &Config) -> Self {
        let store = CategoryStore::load(&config.data_path);
        let classifier = GeminiClassifier::new(config.gemini_api_key.clone())
            .with_model(config.gemini_model.clone())
            .with_api_base(config.gemini_api_base.clone())
            .with_timeout(config.classifier_timeout());

        Self::new(store, Arc::new(classifier))
    }
}
