//! Color manifest contract.
//!
//! The site may serve `/colors/manifest.json`:
//!
//! ```json
//! { "files": ["black.png", "grey.jpg", "pink.png"] }
//! ```
//!
//! When it is absent or unusable the carousel keeps its fallback list, so
//! every failure here is a [`ManifestError`] that ends up as
//! [`ManifestOutcome::Rejected`] rather than something shown to visitors.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::error::{Result, SiteError};

/// Image extensions recognised in manifests and in label derivation.
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp"];

/// Wire shape of the manifest.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorManifest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<String>>,
}

/// Why a manifest was not used.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ManifestError {
    #[error("manifest request failed: {0}")]
    Network(String),
    #[error("manifest request timed out")]
    Timeout,
    #[error("manifest returned HTTP {0}")]
    Status(u16),
    #[error("manifest is not valid JSON: {0}")]
    Malformed(String),
    #[error("manifest has no `files` list")]
    MissingFiles,
    #[error("manifest `files` list is empty")]
    Empty,
}

/// Result of one manifest fetch, as seen by the carousel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ManifestOutcome {
    /// Non-empty list that replaces the active sequence.
    Accepted(Vec<String>),
    Rejected(ManifestError),
}

impl ManifestOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, ManifestOutcome::Accepted(_))
    }
}

impl From<std::result::Result<Vec<String>, ManifestError>> for ManifestOutcome {
    fn from(result: std::result::Result<Vec<String>, ManifestError>) -> Self {
        match result {
            Ok(files) => ManifestOutcome::Accepted(files),
            Err(err) => {
                debug!(error = %err, "color manifest rejected, keeping fallback");
                ManifestOutcome::Rejected(err)
            }
        }
    }
}

/// Validate a decoded manifest body.
pub fn parse_manifest(body: &str) -> std::result::Result<Vec<String>, ManifestError> {
    let manifest: ColorManifest =
        serde_json::from_str(body).map_err(|e| ManifestError::Malformed(e.to_string()))?;
    let files = manifest.files.ok_or(ManifestError::MissingFiles)?;
    if files.is_empty() {
        return Err(ManifestError::Empty);
    }
    Ok(files)
}

/// Validate a complete HTTP response (status + body).
pub fn evaluate_response(status: u16, body: &str) -> ManifestOutcome {
    if !(200..300).contains(&status) {
        return ManifestOutcome::from(Err::<Vec<String>, _>(ManifestError::Status(status)));
    }
    parse_manifest(body).into()
}

/// True for file names ending in one of [`IMAGE_EXTENSIONS`], any case.
pub fn is_image_file(name: &str) -> bool {
    match name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => IMAGE_EXTENSIONS
            .iter()
            .any(|known| ext.eq_ignore_ascii_case(known)),
        _ => false,
    }
}

impl ColorManifest {
    pub fn new(files: Vec<String>) -> Self {
        Self { files: Some(files) }
    }

    /// Build a manifest from the image files directly inside `dir`,
    /// sorted by name. Subdirectories and non-images are skipped.
    pub fn from_dir(dir: &Path) -> Result<Self> {
        let read_err = |source| SiteError::Read {
            path: dir.to_path_buf(),
            source,
        };
        let mut files = Vec::new();
        for entry in std::fs::read_dir(dir).map_err(read_err)? {
            let entry = entry.map_err(read_err)?;
            if !entry.file_type().map_err(read_err)?.is_file() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().into_owned();
            if is_image_file(&name) {
                files.push(name);
            } else {
                debug!(file = %name, "skipping non-image entry");
            }
        }
        files.sort();
        if files.is_empty() {
            return Err(SiteError::EmptyVariants);
        }
        Ok(Self::new(files))
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn accepts_files_list() {
        let files = parse_manifest(r#"{"files": ["a.png", "b.png"]}"#).unwrap();
        assert_eq!(files, vec!["a.png", "b.png"]);
    }

    #[test]
    fn ignores_unknown_keys() {
        let files = parse_manifest(r#"{"files": ["a.png"], "updated": "2025-06-01"}"#).unwrap();
        assert_eq!(files, vec!["a.png"]);
    }

    #[test]
    fn rejects_empty_missing_and_malformed() {
        assert_eq!(parse_manifest(r#"{"files": []}"#), Err(ManifestError::Empty));
        assert_eq!(parse_manifest(r#"{"colors": ["a.png"]}"#), Err(ManifestError::MissingFiles));
        assert!(matches!(
            parse_manifest(r#"{"files": "a.png"}"#),
            Err(ManifestError::Malformed(_))
        ));
        assert!(matches!(parse_manifest("<html>"), Err(ManifestError::Malformed(_))));
        assert!(matches!(
            parse_manifest(r#"{"files": [1, 2]}"#),
            Err(ManifestError::Malformed(_))
        ));
    }

    #[test]
    fn non_success_status_is_rejected_before_body() {
        let outcome = evaluate_response(404, r#"{"files": ["a.png"]}"#);
        assert_eq!(outcome, ManifestOutcome::Rejected(ManifestError::Status(404)));
        assert!(evaluate_response(200, r#"{"files": ["a.png"]}"#).is_accepted());
    }

    #[test]
    fn image_extension_check_is_case_insensitive() {
        assert!(is_image_file("Black.PNG"));
        assert!(is_image_file("grey.jpeg"));
        assert!(!is_image_file("notes.txt"));
        assert!(!is_image_file(".png"));
        assert!(!is_image_file("png"));
    }

    #[test]
    fn from_dir_lists_sorted_images_only() {
        let tmp = TempDir::new().expect("failed to create temp dir for manifest test");
        for name in ["pink.png", "Black.PNG", "notes.txt", "blue.webp"] {
            std::fs::write(tmp.path().join(name), b"x").expect("failed to write fixture");
        }
        std::fs::create_dir(tmp.path().join("raw.png")).expect("failed to create subdir");

        let manifest = ColorManifest::from_dir(tmp.path()).expect("manifest from dir");
        assert_eq!(
            manifest.files,
            Some(vec![
                "Black.PNG".to_string(),
                "blue.webp".to_string(),
                "pink.png".to_string()
            ])
        );
    }

    #[test]
    fn from_dir_without_images_fails() {
        let tmp = TempDir::new().expect("failed to create temp dir for empty manifest test");
        assert!(matches!(
            ColorManifest::from_dir(tmp.path()),
            Err(SiteError::EmptyVariants)
        ));
    }
}
