// src/vibes/media.rs
// Spotify resource id extraction

use once_cell::sync::Lazy;
use regex::Regex;

static RE_SPOTIFY_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:playlist|track|album)[/:]([a-zA-Z0-9]+)").expect("valid regex"));

/// Pull the playlist/track/album id out of a Spotify URL or URI.
///
/// Works for both `https://open.spotify.com/playlist/<id>?si=...` and
/// `spotify:track:<id>`. Returns `None` when nothing matches.
pub fn extract_id(url: &str) -> Option<String> {
    RE_SPOTIFY_ID
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}
