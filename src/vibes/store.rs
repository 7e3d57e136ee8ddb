//! Category store
//!
//! Read-only mapping from vibe key to the curated message, title and media URL.
//! Built once before the listener binds and shared through `Arc` afterwards.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{error, info, warn};

/// One curated entry in the vibes dataset
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CategoryRecord {
    pub message: String,
    pub title: String,
    pub url: String,
}

/// Error types for loading the dataset
#[derive(Debug, thiserror::Error)]
pub enum StoreLoadError {
    #[error("failed to read category dataset {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed category dataset: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Immutable key -> record mapping. Iterates in ascending key order.
#[derive(Debug, Clone, Default)]
pub struct CategoryStore {
    entries: BTreeMap<String, CategoryRecord>,
}

impl CategoryStore {
    /// Load the dataset, degrading to an empty store on any failure.
    ///
    /// A broken dataset never stops the server: every classification simply
    /// resolves to "not found" until the file is fixed and the process restarted.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::try_load(path) {
            Ok(store) => {
                info!(path = %path.display(), entries = store.len(), "Category store loaded");
                store
            }
            Err(e) => {
                error!("Failed to load category store: {}", e);
                Self::default()
            }
        }
    }

    pub fn try_load(path: impl AsRef<Path>) -> Result<Self, StoreLoadError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| StoreLoadError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&raw)
    }

    /// Parse a JSON object of `key -> {message, title, url}`
    pub fn from_json(raw: &str) -> Result<Self, StoreLoadError> {
        let entries: BTreeMap<String, CategoryRecord> = serde_json::from_str(raw)?;
        Ok(Self::from_records(entries))
    }

    pub fn from_records<K: Into<String>>(records: impl IntoIterator<Item = (K, CategoryRecord)>) -> Self {
        let entries: BTreeMap<String, CategoryRecord> = records
            .into_iter()
            .map(|(k, v)| (k.into(), v))
            .collect();

        for key in entries.keys().filter(|k| !is_reachable_key(k)) {
            warn!(key = %key, "Category key is not lowercase ASCII letters and can never be matched");
        }

        Self { entries }
    }

    pub fn get(&self, key: &str) -> Option<&CategoryRecord> {
        self.entries.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Whether the normalizer can ever produce this key
fn is_reachable_key(key: &str) -> bool {
    !key.is_empty() && key.bytes().all(|b| b.is_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"{
        "foco": {
            "message": "Hora de focar.",
            "title": "Deep Focus",
            "url": "https://open.spotify.com/playlist/37i9dQZF1DWZeKCadgRdKQ"
        },
        "festa": {
            "message": "Bora dançar!",
            "title": "Party Hits",
            "url": "https://open.spotify.com/album/4aawyAB9vmqN3uQ7FjRGTy"
        }
    }"#;

    #[test]
    fn test_from_json() {
        let store = CategoryStore::from_json(SAMPLE).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.get("foco").unwrap().title, "Deep Focus");
        assert!(store.get("padrao").is_none());
    }

    #[test]
    fn test_keys_are_sorted() {
        let store = CategoryStore::from_json(SAMPLE).unwrap();
        let keys: Vec<&str> = store.keys().collect();
        assert_eq!(keys, vec!["festa", "foco"]);
    }

    #[test]
    fn test_missing_field_is_parse_error() {
        let err = CategoryStore::from_json(r#"{"foco": {"message": "x"}}"#).unwrap_err();
        assert!(matches!(err, StoreLoadError::Parse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let store = CategoryStore::load(file.path());
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.json");

        assert!(matches!(
            CategoryStore::try_load(&missing),
            Err(StoreLoadError::Io { .. })
        ));
        assert!(CategoryStore::load(&missing).is_empty());
    }

    #[test]
    fn test_load_malformed_file_is_empty() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"[1, 2, 3]").unwrap();

        assert!(CategoryStore::load(file.path()).is_empty());
    }

    #[test]
    fn test_unreachable_keys_are_kept() {
        let record = CategoryRecord {
            message: "m".into(),
            title: "t".into(),
            url: "u".into(),
        };
        let store = CategoryStore::from_records([("Lo-Fi", record.clone()), ("lofi", record)]);
        assert_eq!(store.len(), 2);
        assert!(!is_reachable_key("Lo-Fi"));
        assert!(is_reachable_key("lofi"));
        assert!(!is_reachable_key(""));
    }
}
