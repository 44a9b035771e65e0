//! Static build artifacts: `index.html` head, `sitemap.xml`, color manifest.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tracing::info;

use crate::config::BuildConfig;
use crate::content::{SiteContent, TRAP_HANDLE};
use crate::error::{Result, SiteError};
use crate::manifest::ColorManifest;
use crate::metadata::{PageMetadata, render_head};
use crate::sitemap::Sitemap;

/// Marker in the index template that the rendered head replaces.
pub const HEAD_MARKER: &str = "<!-- traphandle:head -->";

/// Files written by [`build_site`], in write order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BuildReport {
    pub written: Vec<PathBuf>,
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    let write_err = |source| SiteError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(write_err)?;
    }
    std::fs::write(path, contents).map_err(write_err)
}

/// Head fragment for the given public origin.
pub fn head_for(site: &SiteContent, site_url: &str) -> String {
    render_head(&PageMetadata::for_site(site, site_url))
}

/// Stamp `head` into `template` at [`HEAD_MARKER`].
pub fn stamp_template(template: &str, head: &str, template_path: &Path) -> Result<String> {
    if !template.contains(HEAD_MARKER) {
        return Err(SiteError::MissingHeadMarker {
            path: template_path.to_path_buf(),
            marker: HEAD_MARKER,
        });
    }
    Ok(template.replacen(HEAD_MARKER, head, 1))
}

/// Bare document used when no template is configured.
pub fn minimal_document(head: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\" />\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\" />\n\
         {head}\n</head>\n<body></body>\n</html>\n"
    )
}

/// Write every artifact into `config.out_dir`.
pub fn build_site(config: &BuildConfig, now: DateTime<Utc>) -> Result<BuildReport> {
    let mut report = BuildReport::default();
    let head = head_for(&TRAP_HANDLE, &config.site_url);

    let index = match &config.index_template {
        Some(template_path) => {
            let template =
                std::fs::read_to_string(template_path).map_err(|source| SiteError::Read {
                    path: template_path.clone(),
                    source,
                })?;
            stamp_template(&template, &head, template_path)?
        }
        None => minimal_document(&head),
    };
    let index_path = config.out_dir.join("index.html");
    write_file(&index_path, &index)?;
    info!(path = %index_path.display(), "wrote index");
    report.written.push(index_path);

    let sitemap_path = config.out_dir.join("sitemap.xml");
    write_file(&sitemap_path, &Sitemap::for_site(&config.site_url, now).to_xml())?;
    info!(path = %sitemap_path.display(), "wrote sitemap");
    report.written.push(sitemap_path);

    if let Some(colors_dir) = &config.colors_dir {
        let manifest = ColorManifest::from_dir(colors_dir)?;
        let manifest_path = config.out_dir.join("colors").join("manifest.json");
        write_file(&manifest_path, &manifest.to_json_pretty()?)?;
        info!(
            path = %manifest_path.display(),
            colors = manifest.files.as_ref().map_or(0, Vec::len),
            "wrote color manifest"
        );
        report.written.push(manifest_path);
    }

    Ok(report)
}
