//! Error types shared across the library.

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the library API.
///
/// The carousel itself never fails at runtime; these cover construction
/// mistakes and the build tooling.
#[derive(Debug, Error)]
pub enum SiteError {
    /// A carousel needs at least one variant to show.
    #[error("color variant list is empty")]
    EmptyVariants,

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("index template {path} has no `{marker}` marker")]
    MissingHeadMarker { path: PathBuf, marker: &'static str },

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SiteError>;
