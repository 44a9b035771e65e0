//! SEO and social metadata.
//!
//! [`PageMetadata`] is the declarative description of the page head;
//! [`render_head`] turns it into HTML that the build step stamps into
//! `index.html`, together with the schema.org product block from
//! [`product_json_ld`].

use serde_json::{Value, json};

use crate::content::{ProductInfo, SiteContent};

/// Placeholder replaced by the page title in [`PageMetadata::title_template`].
const TITLE_SLOT: &str = "%s";

#[derive(Clone, Debug, PartialEq)]
pub struct Robots {
    pub index: bool,
    pub follow: bool,
    /// Extra directives for Googlebot, e.g. `max-snippet:-1`.
    pub googlebot_extra: Vec<String>,
}

impl Robots {
    pub fn content(&self) -> String {
        let index = if self.index { "index" } else { "noindex" };
        let follow = if self.follow { "follow" } else { "nofollow" };
        format!("{index}, {follow}")
    }

    pub fn googlebot_content(&self) -> String {
        let mut parts = vec![self.content()];
        parts.extend(self.googlebot_extra.iter().cloned());
        parts.join(", ")
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct OgImage {
    pub url: String,
    pub width: u32,
    pub height: u32,
    pub alt: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct OpenGraph {
    pub title: String,
    pub description: String,
    pub url: String,
    pub site_name: String,
    pub images: Vec<OgImage>,
    pub locale: String,
    pub kind: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TwitterCard {
    pub card: String,
    pub title: String,
    pub description: String,
    pub images: Vec<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Icons {
    pub icon: String,
    pub apple: String,
}

/// Everything that goes into `<head>` besides styles and scripts.
#[derive(Clone, Debug, PartialEq)]
pub struct PageMetadata {
    /// Origin that relative URLs resolve against.
    pub base_url: String,
    pub default_title: String,
    pub title_template: String,
    pub description: String,
    pub application_name: String,
    pub keywords: Vec<String>,
    pub category: String,
    pub creator: String,
    pub publisher: String,
    pub robots: Robots,
    pub canonical: String,
    pub open_graph: OpenGraph,
    pub twitter: TwitterCard,
    pub icons: Icons,
    pub product: ProductInfo,
}

const KEYWORDS: &[&str] = &[
    "kiteboard handle",
    "kiteboarding handle",
    "tall kiteboard handle",
    "board-off handle",
    "kiteboarding accessories",
    "custom kiteboard handle",
    "big air kiteboarding",
];

impl PageMetadata {
    pub fn for_site(site: &SiteContent, base_url: &str) -> Self {
        let product = site.product;
        let base_url = base_url.trim_end_matches('/').to_string();
        Self {
            default_title: product.name.to_string(),
            title_template: format!("{TITLE_SLOT} | {}", product.brand),
            description: product.description.to_string(),
            application_name: product.brand.to_string(),
            keywords: KEYWORDS.iter().map(|k| k.to_string()).collect(),
            category: "Sports Equipment".to_string(),
            creator: product.brand.to_string(),
            publisher: product.brand.to_string(),
            robots: Robots {
                index: true,
                follow: true,
                googlebot_extra: vec![
                    "max-image-preview:large".to_string(),
                    "max-snippet:-1".to_string(),
                    "max-video-preview:-1".to_string(),
                ],
            },
            canonical: "/".to_string(),
            open_graph: OpenGraph {
                title: product.name.to_string(),
                description: product.social_description.to_string(),
                url: base_url.clone(),
                site_name: product.brand.to_string(),
                images: vec![OgImage {
                    url: "/opengraph-image.png".to_string(),
                    width: 1200,
                    height: 630,
                    alt: product.name.to_string(),
                }],
                locale: "en_US".to_string(),
                kind: "website".to_string(),
            },
            twitter: TwitterCard {
                card: "summary_large_image".to_string(),
                title: product.name.to_string(),
                description: product.social_description.to_string(),
                images: vec!["/twitter-image.png".to_string()],
            },
            icons: Icons {
                icon: "/icon.png".to_string(),
                apple: "/apple-icon.png".to_string(),
            },
            product,
            base_url,
        }
    }

    /// Document title; `None` is the home page.
    pub fn title_for(&self, page: Option<&str>) -> String {
        match page {
            Some(page) => self.title_template.replace(TITLE_SLOT, page),
            None => self.default_title.clone(),
        }
    }

    /// Resolve a site-relative path against [`PageMetadata::base_url`].
    /// Absolute URLs pass through.
    pub fn absolute(&self, url: &str) -> String {
        if url.starts_with("http://") || url.starts_with("https://") {
            return url.to_string();
        }
        format!("{}/{}", self.base_url, url.trim_start_matches('/'))
    }
}

/// schema.org `Product` record for search engines.
pub fn product_json_ld(meta: &PageMetadata) -> Value {
    let product = &meta.product;
    let images: Vec<String> = meta
        .open_graph
        .images
        .iter()
        .map(|img| meta.absolute(&img.url))
        .collect();
    json!({
        "@context": "https://schema.org",
        "@type": "Product",
        "name": product.name,
        "description": product.description,
        "brand": {
            "@type": "Brand",
            "name": product.brand,
        },
        "category": product.category,
        "image": images,
        "offers": {
            "@type": "Offer",
            "url": meta.base_url,
            "priceCurrency": product.price_currency,
            "availability": "https://schema.org/InStock",
        },
    })
}

/// Escape text for use inside a double-quoted HTML attribute or element body.
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

fn meta_name(out: &mut Vec<String>, name: &str, content: &str) {
    out.push(format!(
        r#"<meta name="{}" content="{}" />"#,
        name,
        escape_html(content)
    ));
}

fn meta_property(out: &mut Vec<String>, property: &str, content: &str) {
    out.push(format!(
        r#"<meta property="{}" content="{}" />"#,
        property,
        escape_html(content)
    ));
}

/// Render the head fragment: title, meta and link tags, JSON-LD.
pub fn render_head(meta: &PageMetadata) -> String {
    let mut tags = Vec::new();
    tags.push(format!(
        "<title>{}</title>",
        escape_html(&meta.title_for(None))
    ));
    meta_name(&mut tags, "description", &meta.description);
    meta_name(&mut tags, "application-name", &meta.application_name);
    meta_name(&mut tags, "keywords", &meta.keywords.join(","));
    meta_name(&mut tags, "category", &meta.category);
    meta_name(&mut tags, "creator", &meta.creator);
    meta_name(&mut tags, "publisher", &meta.publisher);
    meta_name(&mut tags, "robots", &meta.robots.content());
    meta_name(&mut tags, "googlebot", &meta.robots.googlebot_content());
    tags.push(format!(
        r#"<link rel="canonical" href="{}" />"#,
        escape_html(&meta.absolute(&meta.canonical))
    ));

    let og = &meta.open_graph;
    meta_property(&mut tags, "og:title", &og.title);
    meta_property(&mut tags, "og:description", &og.description);
    meta_property(&mut tags, "og:url", &og.url);
    meta_property(&mut tags, "og:site_name", &og.site_name);
    meta_property(&mut tags, "og:locale", &og.locale);
    for image in &og.images {
        meta_property(&mut tags, "og:image", &meta.absolute(&image.url));
        meta_property(&mut tags, "og:image:width", &image.width.to_string());
        meta_property(&mut tags, "og:image:height", &image.height.to_string());
        meta_property(&mut tags, "og:image:alt", &image.alt);
    }
    meta_property(&mut tags, "og:type", &og.kind);

    let tw = &meta.twitter;
    meta_name(&mut tags, "twitter:card", &tw.card);
    meta_name(&mut tags, "twitter:title", &tw.title);
    meta_name(&mut tags, "twitter:description", &tw.description);
    for image in &tw.images {
        meta_name(&mut tags, "twitter:image", &meta.absolute(image));
    }

    tags.push(format!(
        r#"<link rel="icon" href="{}" type="image/png" />"#,
        escape_html(&meta.icons.icon)
    ));
    tags.push(format!(
        r#"<link rel="apple-touch-icon" href="{}" type="image/png" />"#,
        escape_html(&meta.icons.apple)
    ));

    // `</` cannot appear inside the script element.
    let ld = product_json_ld(meta).to_string().replace("</", "<\\/");
    tags.push(format!(r#"<script type="application/ld+json">{ld}</script>"#));

    tags.join("\n")
}
