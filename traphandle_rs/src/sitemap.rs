//! sitemaps.org document for the single public URL.

use std::fmt::Write as _;
use std::time::Duration;

use chrono::{DateTime, SecondsFormat, Utc};

use crate::metadata::escape_html;

/// Maximum age of a generated sitemap.
pub const REVALIDATE: Duration = Duration::from_secs(86_400);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChangeFrequency {
    Always,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl ChangeFrequency {
    pub fn as_str(self) -> &'static str {
        match self {
            ChangeFrequency::Always => "always",
            ChangeFrequency::Hourly => "hourly",
            ChangeFrequency::Daily => "daily",
            ChangeFrequency::Weekly => "weekly",
            ChangeFrequency::Monthly => "monthly",
            ChangeFrequency::Yearly => "yearly",
            ChangeFrequency::Never => "never",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SitemapEntry {
    pub loc: String,
    pub last_modified: DateTime<Utc>,
    pub change_frequency: ChangeFrequency,
    pub priority: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Sitemap {
    pub entries: Vec<SitemapEntry>,
}

impl Sitemap {
    /// The site root, weekly, priority 1.0, stamped with `now`.
    pub fn for_site(site_url: &str, now: DateTime<Utc>) -> Self {
        let loc = format!("{}/", site_url.trim_end_matches('/'));
        Self {
            entries: vec![SitemapEntry {
                loc,
                last_modified: now,
                change_frequency: ChangeFrequency::Weekly,
                priority: 1.0,
            }],
        }
    }

    pub fn to_xml(&self) -> String {
        let mut xml = String::from(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
             <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
        );
        for entry in &self.entries {
            // Writing into a String cannot fail.
            let _ = write!(
                xml,
                "<url>\n<loc>{}</loc>\n<lastmod>{}</lastmod>\n<changefreq>{}</changefreq>\n<priority>{:.1}</priority>\n</url>\n",
                escape_html(&entry.loc),
                entry.last_modified.to_rfc3339_opts(SecondsFormat::Millis, true),
                entry.change_frequency.as_str(),
                entry.priority,
            );
        }
        xml.push_str("</urlset>\n");
        xml
    }
}

/// Serves a sitemap, regenerating it once it is older than [`REVALIDATE`].
#[derive(Debug)]
pub struct SitemapCache {
    site_url: String,
    max_age: Duration,
    cached: Option<(DateTime<Utc>, String)>,
}

impl SitemapCache {
    pub fn new(site_url: impl Into<String>) -> Self {
        Self {
            site_url: site_url.into(),
            max_age: REVALIDATE,
            cached: None,
        }
    }

    pub fn is_stale(&self, now: DateTime<Utc>) -> bool {
        match &self.cached {
            None => true,
            Some((generated, _)) => now
                .signed_duration_since(*generated)
                .to_std()
                .is_ok_and(|age| age >= self.max_age),
        }
    }

    /// When the document was last built, if ever.
    pub fn generated_at(&self) -> Option<DateTime<Utc>> {
        self.cached.as_ref().map(|(at, _)| *at)
    }

    pub fn get(&mut self, now: DateTime<Utc>) -> &str {
        if self.is_stale(now) {
            tracing::debug!(site = %self.site_url, "regenerating sitemap");
            let xml = Sitemap::for_site(&self.site_url, now).to_xml();
            self.cached = Some((now, xml));
        }
        match &self.cached {
            Some((_, xml)) => xml.as_str(),
            None => "",
        }
    }
}
