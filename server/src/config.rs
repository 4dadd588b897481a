//! Environment-driven settings for the gallery host.

use std::path::PathBuf;

/// Path to a LaTeX emoji macro file; when set, `/data.json` is generated from it.
pub const MACROS_VAR: &str = "GALLERY_MACROS";
/// Prefix applied to every generated image `src`.
pub const IMAGE_BASE_VAR: &str = "GALLERY_IMAGE_BASE";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServerConfig {
    pub macros: Option<PathBuf>,
    pub image_base: String,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            macros: lookup(MACROS_VAR)
                .filter(|s| !s.is_empty())
                .map(PathBuf::from),
            image_base: lookup(IMAGE_BASE_VAR).unwrap_or_default(),
        }
    }
}
