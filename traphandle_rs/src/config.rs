//! Build configuration.
//!
//! Loads optional `traphandle.toml` from the working directory. Command-line
//! flags override whatever the file sets.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::warn;

use crate::content::SITE_URL;
use crate::error::{Result, SiteError};

/// Default config file name.
pub const CONFIG_FILE: &str = "traphandle.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Public origin used for canonical, Open Graph and sitemap URLs.
    pub site_url: String,
    /// Directory the build writes into.
    pub out_dir: PathBuf,
    /// Directory of color images; when set, `colors/manifest.json` is generated.
    pub colors_dir: Option<PathBuf>,
    /// HTML template containing the head marker (usually trunk's output).
    pub index_template: Option<PathBuf>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            site_url: SITE_URL.to_string(),
            out_dir: PathBuf::from("dist"),
            colors_dir: None,
            index_template: None,
        }
    }
}

impl BuildConfig {
    /// Load `traphandle.toml` from `root`.
    /// Returns defaults if the file doesn't exist or is invalid.
    pub fn load(root: &Path) -> Self {
        Self::load_from_path(&root.join(CONFIG_FILE))
    }

    /// Lenient load: problems are logged and defaults returned.
    pub fn load_from_path(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::try_load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!("{e}; using defaults");
                Self::default()
            }
        }
    }

    /// Strict load for an explicitly requested file.
    pub fn try_load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| SiteError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| SiteError::Config {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn missing_file_gives_defaults() {
        let tmp = TempDir::new().expect("failed to create temp dir for config test");
        let config = BuildConfig::load(tmp.path());
        assert_eq!(config, BuildConfig::default());
        assert_eq!(config.site_url, "https://www.traphandle.com");
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let tmp = TempDir::new().expect("failed to create temp dir for config test");
        let mut file = std::fs::File::create(tmp.path().join(CONFIG_FILE))
            .expect("failed to create config file");
        writeln!(file, "site_url = \"https://staging.traphandle.com\"").unwrap();
        writeln!(file, "colors_dir = \"public/colors\"").unwrap();

        let config = BuildConfig::load(tmp.path());
        assert_eq!(config.site_url, "https://staging.traphandle.com");
        assert_eq!(config.colors_dir, Some(PathBuf::from("public/colors")));
        assert_eq!(config.out_dir, PathBuf::from("dist"));
    }

    #[test]
    fn invalid_file_falls_back_leniently_but_fails_strictly() {
        let tmp = TempDir::new().expect("failed to create temp dir for config test");
        let path = tmp.path().join(CONFIG_FILE);
        std::fs::write(&path, "site_url = [").expect("failed to write config");

        assert_eq!(BuildConfig::load_from_path(&path), BuildConfig::default());
        assert!(matches!(
            BuildConfig::try_load(&path),
            Err(SiteError::Config { .. })
        ));
    }
}
