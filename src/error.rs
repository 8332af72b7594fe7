//! Pipeline error taxonomy.
//!
//! The encoders and spatial operations are total by construction (epsilon
//! denominators, zero-padding), so the only failure paths are resource
//! lookups and the lobby's filesystem persistence.

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the embedding pipeline and lobby store.
#[derive(Debug, Error)]
pub enum EmbedError {
    /// A referenced CV document does not exist.
    #[error("CV path not found: {0}")]
    CvNotFound(PathBuf),

    /// A lobby lookup by name matched no profile.
    #[error("profile not found: {0}")]
    ProfileNotFound(String),

    /// Filesystem failure while reading a CV or persisting the lobby.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON in a CV document or lobby file.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
