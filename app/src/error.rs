//! Failure modes of the gallery loader.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GalleryError {
    /// The request never produced a response, or its body could not be read.
    #[error("network error: {0}")]
    Network(String),
    /// A response arrived with a status outside 200..=299.
    #[error("network error: HTTP {0}")]
    Status(u16),
    #[error("failed to parse gallery data: {0}")]
    Parse(#[from] serde_json::Error),
    /// The catalog parsed, but its top-level value is not a sequence.
    #[error("gallery data must be an array, found {0}")]
    NotAnArray(&'static str),
    #[error("#{0} element not found")]
    MissingContainer(String),
    /// The document rejected building or attaching a figure.
    #[error("failed to render figure: {0}")]
    Render(String),
    #[error("failed to load image: {0}")]
    ImageLoad(String),
}
