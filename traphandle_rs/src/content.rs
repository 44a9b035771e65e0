//! Literal site content.
//!
//! Everything the page shows lives in [`TRAP_HANDLE`], a compile-time
//! constant. Nothing here is mutated at runtime; renderers borrow it.

use std::time::Duration;

/// Marketplace listing where purchases happen.
pub const MARKETPLACE_URL: &str =
    "https://www.etsy.com/listing/1593207612/tall-kiteboard-handle-custom-engraving";

/// Social profile with riding clips.
pub const SOCIAL_URL: &str = "https://www.instagram.com/trap.handle/";

/// Canonical origin; relative metadata URLs resolve against it.
pub const SITE_URL: &str = "https://www.traphandle.com";

/// Carousel images used when no manifest is served.
pub const FALLBACK_COLORS: &[&str] = &[
    "black.png",
    "grey.jpg",
    "pink.png",
    "orange.png",
    "green.png",
    "blue.png",
];

/// Path of the optional remote color manifest.
pub const MANIFEST_PATH: &str = "/colors/manifest.json";

/// Prefix under which color images are served.
pub const COLOR_IMAGE_PREFIX: &str = "/colors/";

/// Auto-advance period of the color carousel.
pub const CAROUSEL_INTERVAL: Duration = Duration::from_millis(4200);

/// Star rating clamped to `1..=5`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Rating(u8);

impl Rating {
    /// Out-of-range values are clamped.
    pub const fn new(value: u8) -> Self {
        if value < 1 {
            Rating(1)
        } else if value > 5 {
            Rating(5)
        } else {
            Rating(value)
        }
    }

    pub const fn value(self) -> u8 {
        self.0
    }

    /// Filled/empty flags for a five-star row.
    pub fn stars(self) -> [bool; 5] {
        let full = self.0 as usize;
        std::array::from_fn(|i| i < full)
    }

    /// Accessible description, e.g. `"4 out of 5 stars"`.
    pub fn aria_label(self) -> String {
        format!("{} out of 5 stars", self.0)
    }
}

/// A verified buyer review copied from the marketplace.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Review {
    pub rating: Rating,
    pub quote: &'static str,
    pub author: &'static str,
    pub date: Option<&'static str>,
    /// Variant details such as width and color.
    pub meta: Option<&'static str>,
}

impl Review {
    /// Author line shown under the quote: `"Gil C. • Dec 6, 2023"`.
    pub fn byline(&self) -> String {
        match self.date {
            Some(date) => format!("{} • {}", self.author, date),
            None => self.author.to_string(),
        }
    }
}

/// Outbound reference rendered as a button or link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExternalLink {
    pub label: &'static str,
    pub url: &'static str,
}

/// Third-party video shown in the featured section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VideoEmbed {
    /// Frame title for assistive tech.
    pub title: &'static str,
    pub heading: &'static str,
    pub blurb: &'static str,
    pub video_id: &'static str,
    pub disclaimer: Option<&'static str>,
}

impl VideoEmbed {
    pub fn embed_url(&self) -> String {
        format!("https://www.youtube.com/embed/{}", self.video_id)
    }

    pub fn watch_url(&self) -> String {
        format!("https://www.youtube.com/watch?v={}", self.video_id)
    }
}

/// Permissions granted to embedded players.
pub const EMBED_ALLOW: &str =
    "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture";

/// Looping muted background clip; MP4 first, MOV as fallback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BackgroundVideo {
    pub mp4: &'static str,
    pub mov: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DesignPoint {
    pub title: &'static str,
    pub body: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavAnchor {
    pub label: &'static str,
    pub href: &'static str,
}

/// Plain product facts used by both the page and the metadata emitter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProductInfo {
    pub brand: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub social_description: &'static str,
    /// Structured-data category (schema.org).
    pub category: &'static str,
    pub price_currency: &'static str,
}

/// The whole page, as data.
#[derive(Clone, Copy, Debug)]
pub struct SiteContent {
    pub product: ProductInfo,
    pub tagline: &'static str,
    pub nav: &'static [NavAnchor],
    pub hero_badge: &'static str,
    pub hero_headline: &'static str,
    pub hero_highlight: &'static str,
    pub hero_copy: &'static str,
    pub buy: ExternalLink,
    pub watch: ExternalLink,
    pub global_background: BackgroundVideo,
    pub design_background: BackgroundVideo,
    pub design_badge: &'static str,
    pub design_headline: &'static str,
    pub design_copy: &'static str,
    pub design_points: &'static [DesignPoint],
    pub featured_headline: &'static str,
    pub featured_copy: &'static str,
    pub videos: &'static [VideoEmbed],
    pub reviews_headline: &'static str,
    pub reviews_copy: &'static str,
    pub reviews: &'static [Review],
    pub footer_motto: &'static str,
    pub fallback_colors: &'static [&'static str],
}

/// Upper bound on rendered reviews.
pub const MAX_REVIEWS: usize = 6;

impl SiteContent {
    /// Reviews in display order, capped at [`MAX_REVIEWS`].
    pub fn visible_reviews(&self) -> &'static [Review] {
        &self.reviews[..self.reviews.len().min(MAX_REVIEWS)]
    }

    /// Owned copy of the fallback carousel sequence.
    pub fn fallback_variants(&self) -> Vec<String> {
        self.fallback_colors.iter().map(|f| f.to_string()).collect()
    }

    /// Footer line for the given year.
    pub fn copyright(&self, year: i32) -> String {
        format!("© {} {} • {}", year, self.product.brand, self.footer_motto)
    }
}

const REVIEWS: &[Review] = &[
    Review {
        rating: Rating::new(5),
        quote: "Great product — keep up the good work!",
        author: "Robbie C.",
        date: Some("May 10, 2024"),
        meta: Some("Width 20 cm • Yellow w black text"),
    },
    Review {
        rating: Rating::new(5),
        quote: "Sturdy and easy to grab. The custom text is a nice touch.",
        author: "Gil C.",
        date: Some("Dec 6, 2023"),
        meta: Some("Width 21.5 cm • Black on Black"),
    },
    Review {
        rating: Rating::new(5),
        quote: "Great quality and very durable. Made board-offs and getting the board back on my feet way easier.",
        author: "Gil C.",
        date: Some("Dec 6, 2023"),
        meta: Some("Width 17 cm • Black on Black"),
    },
    Review {
        rating: Rating::new(4),
        quote: "Very attentive seller. Recommended. Good product.",
        author: "Juan Jose",
        date: Some("Jul 31, 2025"),
        meta: Some("Width 18 cm • Yellow w black text"),
    },
    Review {
        rating: Rating::new(5),
        quote: "Arrived quickly, excellent quality — I recommend it.",
        author: "Paolo",
        date: Some("Jul 20, 2024"),
        meta: Some("Width 18 cm • Red w black text"),
    },
    Review {
        rating: Rating::new(5),
        quote: "Very good quality product!",
        author: "Nicolas",
        date: Some("Jul 17, 2024"),
        meta: Some("Width 18 cm • Blue on Blue"),
    },
];

pub const TRAP_HANDLE: SiteContent = SiteContent {
    product: ProductInfo {
        brand: "Trap Handle",
        name: "Trap Handle — Tall Kiteboard Handle",
        description: "A tall kiteboard handle built for clean board-offs and a custom feel. \
                      UV-resistant ASA material, ergonomics-first shape, and custom engraving.",
        social_description: "Built for board-offs. Custom engraved. UV-resistant ASA. \
                             Designed for big-air moments.",
        category: "Sporting Goods",
        price_currency: "USD",
    },
    tagline: "The handle that will unlock that next trick.",
    nav: &[
        NavAnchor { label: "Design", href: "#design" },
        NavAnchor { label: "Featured", href: "#featured" },
        NavAnchor { label: "Reviews", href: "#reviews" },
    ],
    hero_badge: "Built for board-offs • Custom engraved • ASA durable",
    hero_headline: "The handle built for",
    hero_highlight: "big-air moments",
    hero_copy: "A tall kiteboard handle designed for confident grabs, clean board-offs, \
                and a premium feel.",
    buy: ExternalLink { label: "Buy", url: MARKETPLACE_URL },
    watch: ExternalLink { label: "Watch it in action", url: SOCIAL_URL },
    global_background: BackgroundVideo { mp4: "/hero.mp4", mov: "/hero.mov" },
    design_background: BackgroundVideo {
        mp4: "/spinningCustom.mp4",
        mov: "/spinningCustom.mov",
    },
    design_badge: "Design + materials + customization",
    design_headline: "Built for real sessions.",
    design_copy: "Shaped for control, printed in a material that holds up to sun and salt, \
                  and finished with engraving that makes your board feel personal.",
    design_points: &[
        DesignPoint {
            title: "Why ASA",
            body: "ASA is chosen specifically for kiteboarding: it’s UV resistant and holds up \
                   better outdoors than typical 3D-print plastics.",
        },
        DesignPoint {
            title: "Ergonomics-first shape",
            body: "Built around how your hand actually grabs during board-offs — iterated with \
                   pro + novice feedback and an ergonomics engineer.",
        },
        DesignPoint {
            title: "Custom engraving",
            body: "Add a name, number, crew tag — or contact info so a lost board can find its \
                   way back.",
        },
    ],
    featured_headline: "Seen and tested.",
    featured_copy: "Trap Handle has been independently reviewed and appears in official \
                    product footage.",
    videos: &[
        VideoEmbed {
            title: "Mackiteboarding review",
            heading: "Reviewed by Mackiteboarding",
            blurb: "Independent breakdown of the handle and how it rides.",
            video_id: "gE1oH_un8gA",
            disclaimer: None,
        },
        VideoEmbed {
            title: "Rebel D/LAB product footage",
            heading: "Featured in Rebel D/LAB footage",
            blurb: "Appears in official product footage during high-end riding.",
            video_id: "Kex3zCCO9tI",
            disclaimer: Some("Appearance does not imply sponsorship or endorsement."),
        },
    ],
    reviews_headline: "Rider-approved.",
    reviews_copy: "Verified buyers using the handle in real conditions.",
    reviews: REVIEWS,
    footer_motto: "We don’t ride. We fly.",
    fallback_colors: FALLBACK_COLORS,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_clamps_into_range() {
        assert_eq!(Rating::new(0).value(), 1);
        assert_eq!(Rating::new(9).value(), 5);
        assert_eq!(Rating::new(4).stars(), [true, true, true, true, false]);
        assert_eq!(Rating::new(4).aria_label(), "4 out of 5 stars");
    }

    #[test]
    fn byline_appends_date_when_present() {
        let review = TRAP_HANDLE.reviews[1];
        assert_eq!(review.byline(), "Gil C. • Dec 6, 2023");

        let undated = Review { date: None, ..review };
        assert_eq!(undated.byline(), "Gil C.");
    }

    #[test]
    fn video_urls_derive_from_id() {
        let video = TRAP_HANDLE.videos[0];
        assert_eq!(video.embed_url(), "https://www.youtube.com/embed/gE1oH_un8gA");
        assert_eq!(video.watch_url(), "https://www.youtube.com/watch?v=gE1oH_un8gA");
    }

    #[test]
    fn fallback_is_six_non_empty_files() {
        let fallback = TRAP_HANDLE.fallback_variants();
        assert_eq!(fallback.len(), 6);
        assert_eq!(fallback[0], "black.png");
        assert!(fallback.iter().all(|f| !f.is_empty()));
    }

    #[test]
    fn visible_reviews_are_capped() {
        assert!(TRAP_HANDLE.visible_reviews().len() <= MAX_REVIEWS);
        assert_eq!(TRAP_HANDLE.visible_reviews()[0].author, "Robbie C.");
    }

    #[test]
    fn copyright_line() {
        assert_eq!(
            TRAP_HANDLE.copyright(2026),
            "© 2026 Trap Handle • We don’t ride. We fly."
        );
    }
}
