//! Color carousel: state machine and driver.
//!
//! [`Carousel`] is the pure state (variant list + current index). Every
//! mutation wraps modulo the list length, so the index is always valid.
//!
//! [`CarouselDriver`] adds the timed behaviour: one repeating timer that
//! advances the carousel, re-armed whenever the list length changes, and a
//! liveness guard so a manifest that resolves after teardown is dropped.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use tracing::debug;

use crate::content::{COLOR_IMAGE_PREFIX, FALLBACK_COLORS, SiteContent};
use crate::error::{Result, SiteError};
use crate::lifecycle::{Liveness, Scheduler};
use crate::manifest::{IMAGE_EXTENSIONS, ManifestOutcome};

/// Display label for a variant file: extension dropped, upper-cased.
///
/// ```
/// assert_eq!(traphandle::carousel::variant_label("Black.PNG"), "BLACK");
/// assert_eq!(traphandle::carousel::variant_label("sand.tiff"), "SAND.TIFF");
/// ```
pub fn variant_label(file: &str) -> String {
    let stem = match file.rsplit_once('.') {
        Some((stem, ext))
            if IMAGE_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known)) =>
        {
            stem
        }
        _ => file,
    };
    stem.to_uppercase()
}

/// One dot under the carousel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Indicator<'a> {
    pub index: usize,
    pub file: &'a str,
    pub active: bool,
}

/// Ordered, non-empty list of color variants plus the current position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Carousel {
    files: Vec<String>,
    index: usize,
}

impl Carousel {
    /// Fails on an empty list.
    pub fn new(files: Vec<String>) -> Result<Self> {
        if files.is_empty() {
            return Err(SiteError::EmptyVariants);
        }
        Ok(Self { files, index: 0 })
    }

    /// Carousel over the site's fallback colors.
    pub fn with_fallback(content: &SiteContent) -> Self {
        Self::new(content.fallback_variants()).unwrap_or_else(|_| Self {
            files: FALLBACK_COLORS.iter().map(|f| f.to_string()).collect(),
            index: 0,
        })
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn files(&self) -> &[String] {
        &self.files
    }

    pub fn current(&self) -> &str {
        &self.files[self.index]
    }

    pub fn label(&self) -> String {
        variant_label(self.current())
    }

    /// Image URL for the current variant.
    pub fn image_src(&self) -> String {
        format!("{}{}", COLOR_IMAGE_PREFIX, self.current())
    }

    pub fn next(&mut self) {
        self.index = (self.index + 1) % self.files.len();
    }

    pub fn previous(&mut self) {
        let len = self.files.len();
        self.index = (self.index + len - 1) % len;
    }

    /// Automatic advance; same effect as [`Carousel::next`].
    pub fn tick(&mut self) {
        self.next();
    }

    /// Jump to `index`. Out-of-range values land on the last variant.
    pub fn select(&mut self, index: usize) {
        self.index = index.min(self.files.len() - 1);
    }

    /// Swap in a new list and rewind. Empty lists are refused and leave the
    /// state untouched; returns whether the list was taken.
    pub fn replace_files(&mut self, files: Vec<String>) -> bool {
        if files.is_empty() {
            return false;
        }
        self.files = files;
        self.index = 0;
        true
    }

    pub fn indicators(&self) -> impl Iterator<Item = Indicator<'_>> {
        self.files.iter().enumerate().map(|(index, file)| Indicator {
            index,
            file,
            active: index == self.index,
        })
    }
}

/// Where a driver keeps its [`Carousel`].
///
/// Natively this is an `Rc<RefCell<Carousel>>`; the browser app stores it in
/// a reactive signal so the view re-renders on every mutation.
pub trait CarouselStore: Clone + 'static {
    fn modify(&self, f: impl FnOnce(&mut Carousel));

    fn observe<R>(&self, f: impl FnOnce(&Carousel) -> R) -> R;
}

impl CarouselStore for Rc<RefCell<Carousel>> {
    fn modify(&self, f: impl FnOnce(&mut Carousel)) {
        f(&mut *self.borrow_mut());
    }

    fn observe<R>(&self, f: impl FnOnce(&Carousel) -> R) -> R {
        f(&*self.borrow())
    }
}

struct ArmedTimer<H> {
    len: usize,
    handle: H,
}

/// Owns the auto-advance timer and the mount lifecycle of one carousel.
pub struct CarouselDriver<S: Scheduler, St: CarouselStore> {
    store: St,
    scheduler: S,
    period: Duration,
    liveness: Liveness,
    started: bool,
    timer: Option<ArmedTimer<S::Handle>>,
}

impl<S: Scheduler, St: CarouselStore> CarouselDriver<S, St> {
    pub fn new(store: St, scheduler: S, period: Duration) -> Self {
        Self {
            store,
            scheduler,
            period,
            liveness: Liveness::new(),
            started: false,
            timer: None,
        }
    }

    pub fn store(&self) -> &St {
        &self.store
    }

    /// Token for async work started on behalf of this carousel.
    pub fn liveness(&self) -> Liveness {
        self.liveness.token()
    }

    pub fn is_running(&self) -> bool {
        self.timer.is_some()
    }

    /// Mount: arm the timer. Restarting after [`CarouselDriver::stop`] issues a
    /// fresh liveness flag; tokens from the previous mount stay dead.
    pub fn start(&mut self) {
        if !self.liveness.is_alive() {
            self.liveness = Liveness::new();
        }
        self.started = true;
        self.sync_timer();
    }

    /// Unmount: cancel the timer and invalidate outstanding tokens.
    pub fn stop(&mut self) {
        self.started = false;
        self.liveness.end();
        if let Some(armed) = self.timer.take() {
            self.scheduler.cancel(armed.handle);
        }
    }

    /// Re-arm if the watched length changed since the timer was registered.
    /// The old timer is cancelled before the new one exists. Does nothing
    /// outside a `start()`/`stop()` window.
    pub fn sync_timer(&mut self) {
        if !self.started || !self.liveness.is_alive() {
            return;
        }
        let len = self.store.observe(Carousel::len);
        if self.timer.as_ref().is_some_and(|armed| armed.len == len) {
            return;
        }
        if let Some(armed) = self.timer.take() {
            self.scheduler.cancel(armed.handle);
        }
        let store = self.store.clone();
        let handle = self
            .scheduler
            .schedule_repeating(self.period, Box::new(move || store.modify(Carousel::tick)));
        debug!(len, period_ms = self.period.as_millis() as u64, "carousel timer armed");
        self.timer = Some(ArmedTimer { len, handle });
    }

    /// Apply a manifest fetch result. Returns true when the active list was
    /// replaced. No-op once stopped.
    pub fn apply_manifest(&mut self, outcome: ManifestOutcome) -> bool {
        if !self.liveness.is_alive() {
            debug!("carousel stopped before manifest resolved; dropping result");
            return false;
        }
        let ManifestOutcome::Accepted(files) = outcome else {
            return false;
        };
        let mut replaced = false;
        self.store.modify(|carousel| replaced = carousel.replace_files(files));
        if replaced {
            self.sync_timer();
        }
        replaced
    }

    pub fn next(&self) {
        self.store.modify(Carousel::next);
    }

    pub fn previous(&self) {
        self.store.modify(Carousel::previous);
    }

    pub fn select(&self, index: usize) {
        self.store.modify(|carousel| carousel.select(index));
    }
}

impl<S: Scheduler, St: CarouselStore> Drop for CarouselDriver<S, St> {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::TRAP_HANDLE;

    fn carousel(files: &[&str]) -> Carousel {
        Carousel::new(files.iter().map(|f| f.to_string()).collect()).unwrap()
    }

    #[test]
    fn label_strips_known_extension_case_insensitively() {
        assert_eq!(variant_label("Black.PNG"), "BLACK");
        assert_eq!(variant_label("grey.jpg"), "GREY");
        assert_eq!(variant_label("sea-foam.JpEg"), "SEA-FOAM");
        assert_eq!(variant_label("night.blue.webp"), "NIGHT.BLUE");
        assert_eq!(variant_label("noext"), "NOEXT");
    }

    #[test]
    fn empty_list_is_refused() {
        assert!(matches!(Carousel::new(vec![]), Err(SiteError::EmptyVariants)));
    }

    #[test]
    fn next_and_previous_wrap() {
        let mut c = carousel(&["a.png", "b.png", "c.png"]);
        c.previous();
        assert_eq!(c.index(), 2);
        c.next();
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn full_cycle_returns_to_start() {
        let mut c = Carousel::with_fallback(&TRAP_HANDLE);
        c.select(2);
        for _ in 0..c.len() {
            c.next();
        }
        assert_eq!(c.index(), 2);
        for _ in 0..c.len() {
            c.previous();
        }
        assert_eq!(c.index(), 2);
    }

    #[test]
    fn tick_matches_next() {
        let mut ticked = carousel(&["a.png", "b.png"]);
        let mut stepped = ticked.clone();
        ticked.tick();
        stepped.next();
        assert_eq!(ticked, stepped);
    }

    #[test]
    fn single_variant_stays_at_zero() {
        let mut c = carousel(&["only.png"]);
        c.next();
        c.previous();
        c.tick();
        c.select(0);
        assert_eq!(c.index(), 0);
        assert_eq!(c.current(), "only.png");
    }

    #[test]
    fn select_clamps_out_of_range() {
        let mut c = carousel(&["a.png", "b.png"]);
        c.select(7);
        assert_eq!(c.index(), 1);
    }

    #[test]
    fn replace_rewinds_and_refuses_empty() {
        let mut c = carousel(&["a.png", "b.png", "c.png"]);
        c.select(2);
        assert!(!c.replace_files(vec![]));
        assert_eq!(c.index(), 2);
        assert!(c.replace_files(vec!["x.png".into()]));
        assert_eq!(c.index(), 0);
        assert_eq!(c.files(), ["x.png"]);
    }

    #[test]
    fn indicators_mark_current() {
        let mut c = carousel(&["a.png", "b.png", "c.png"]);
        c.select(1);
        let active: Vec<bool> = c.indicators().map(|i| i.active).collect();
        assert_eq!(active, vec![false, true, false]);
        assert_eq!(c.image_src(), "/colors/b.png");
        assert_eq!(c.label(), "B");
    }
}
