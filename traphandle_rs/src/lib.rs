//! # traphandle
//!
//! Content, color carousel engine and build tooling behind
//! [traphandle.com](https://www.traphandle.com), the one-page site for the
//! Trap Handle tall kiteboard handle.
//!
//! The browser app (`traphandle-landing`) renders the page from
//! [`content::TRAP_HANDLE`] and drives a [`carousel::CarouselDriver`]. The
//! `traphandle` binary writes the crawler-facing artifacts (head metadata,
//! `sitemap.xml`, color manifest) at build time.
//!
//! ## Carousel without a browser
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use traphandle::carousel::{Carousel, CarouselDriver};
//! use traphandle::content::{CAROUSEL_INTERVAL, TRAP_HANDLE};
//! use traphandle::lifecycle::ManualScheduler;
//!
//! let clock = ManualScheduler::new();
//! let store = Rc::new(RefCell::new(Carousel::with_fallback(&TRAP_HANDLE)));
//! let mut driver = CarouselDriver::new(Rc::clone(&store), clock.clone(), CAROUSEL_INTERVAL);
//!
//! driver.start();
//! clock.advance(CAROUSEL_INTERVAL * 2);
//! assert_eq!(store.borrow().index(), 2);
//! driver.stop();
//! ```

pub mod carousel;
pub mod config;
pub mod content;
pub mod emit;
pub mod error;
pub mod lifecycle;
pub mod manifest;
pub mod metadata;
pub mod sitemap;

pub use carousel::{Carousel, CarouselDriver, CarouselStore, variant_label};
pub use error::{Result, SiteError};
pub use lifecycle::{Liveness, ManualScheduler, Scheduler};
pub use manifest::{ManifestError, ManifestOutcome};
