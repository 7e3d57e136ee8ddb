//! Turns the model's free-text reply into a classification outcome.

use super::media::extract_id;
use super::store::CategoryStore;

/// Outcome of classifying one piece of user text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassificationResult {
    Found {
        key: String,
        message: String,
        title: String,
        media_id: Option<String>,
    },
    NotFound,
}

impl ClassificationResult {
    pub fn is_found(&self) -> bool {
        matches!(self, ClassificationResult::Found { .. })
    }
}

/// Trim, lowercase and keep only `a-z`.
pub fn normalize_key(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase())
        .collect()
}

/// Resolve a raw model reply against the store. Never fails; anything that is
/// not a stored key (the sentinel included) is `NotFound`.
pub fn normalize(raw: &str, store: &CategoryStore) -> ClassificationResult {
    let key = normalize_key(raw);

    match store.get(&key) {
        Some(record) => ClassificationResult::Found {
            media_id: extract_id(&record.url),
            message: record.message.clone(),
            title: record.title.clone(),
            key,
        },
        None => ClassificationResult::NotFound,
    }
}
