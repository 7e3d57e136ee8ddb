// src/vibes/mod.rs
// Vibe dataset, media id extraction and reply normalization

pub mod media;
pub mod normalize;
pub mod store;

pub use media::extract_id;
pub use normalize::{normalize, normalize_key, ClassificationResult};
pub use store::{CategoryRecord, CategoryStore, StoreLoadError};

/// Token the model is told to answer with when no category fits
pub const SENTINEL_KEY: &str = "padrao";
