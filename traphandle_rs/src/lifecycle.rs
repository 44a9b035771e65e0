//! Timer and lifecycle seam.
//!
//! Components never talk to `setInterval` or a DOM lifecycle directly. They
//! register repeating callbacks through a [`Scheduler`] and guard async
//! completions with a [`Liveness`] token, so the same driver runs in the
//! browser and under [`ManualScheduler`] in tests.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

/// Platform timer facility.
pub trait Scheduler {
    /// Handle returned for a registered timer; consumed by [`Scheduler::cancel`].
    type Handle;

    /// Fire `callback` every `period` until cancelled.
    fn schedule_repeating(&mut self, period: Duration, callback: Box<dyn Fn()>) -> Self::Handle;

    fn cancel(&mut self, handle: Self::Handle);
}

/// Shared "still mounted" flag.
///
/// Clones share the same flag. Async work takes a [`Liveness::token`] before
/// suspending and checks it on resumption.
#[derive(Clone)]
pub struct Liveness {
    alive: Rc<Cell<bool>>,
}

impl Liveness {
    pub fn new() -> Self {
        Self {
            alive: Rc::new(Cell::new(true)),
        }
    }

    pub fn token(&self) -> Liveness {
        self.clone()
    }

    pub fn is_alive(&self) -> bool {
        self.alive.get()
    }

    /// Mark the owner as torn down. Idempotent.
    pub fn end(&self) {
        self.alive.set(false);
    }
}

impl Default for Liveness {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Liveness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Liveness")
            .field("alive", &self.is_alive())
            .finish()
    }
}

/// Identifier for a timer registered with [`ManualScheduler`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

struct ManualTimer {
    id: TimerId,
    period: Duration,
    due: Duration,
    callback: Rc<dyn Fn()>,
}

#[derive(Default)]
struct ManualClock {
    now: Duration,
    next_id: u64,
    timers: Vec<ManualTimer>,
}

/// Deterministic scheduler driven by a virtual clock.
///
/// Clones share the clock, so a test can hand one clone to a driver and keep
/// another to call [`ManualScheduler::advance`].
#[derive(Clone, Default)]
pub struct ManualScheduler {
    clock: Rc<RefCell<ManualClock>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Virtual time elapsed since creation.
    pub fn now(&self) -> Duration {
        self.clock.borrow().now
    }

    /// Number of timers currently registered.
    pub fn active_timers(&self) -> usize {
        self.clock.borrow().timers.len()
    }

    /// Move the clock forward, firing every timer that comes due, in due order.
    pub fn advance(&self, by: Duration) {
        let target = self.clock.borrow().now + by;
        loop {
            // Pick the earliest due timer and release the borrow before calling
            // out, so callbacks may touch the scheduler.
            let callback = {
                let mut clock = self.clock.borrow_mut();
                let Some(timer) = clock
                    .timers
                    .iter_mut()
                    .filter(|t| t.due <= target)
                    .min_by_key(|t| t.due)
                else {
                    break;
                };
                let due = timer.due;
                timer.due += timer.period;
                let callback = Rc::clone(&timer.callback);
                clock.now = due;
                callback
            };
            callback();
        }
        self.clock.borrow_mut().now = target;
    }
}

impl Scheduler for ManualScheduler {
    type Handle = TimerId;

    fn schedule_repeating(&mut self, period: Duration, callback: Box<dyn Fn()>) -> TimerId {
        let mut clock = self.clock.borrow_mut();
        let id = TimerId(clock.next_id);
        clock.next_id += 1;
        // A zero period would never let the clock move forward.
        let period = period.max(Duration::from_millis(1));
        let due = clock.now + period;
        clock.timers.push(ManualTimer {
            id,
            period,
            due,
            callback: Rc::from(callback),
        });
        id
    }

    fn cancel(&mut self, handle: TimerId) {
        self.clock.borrow_mut().timers.retain(|t| t.id != handle);
    }
}

impl fmt::Debug for ManualScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let clock = self.clock.borrow();
        f.debug_struct("ManualScheduler")
            .field("now", &clock.now)
            .field("timers", &clock.timers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn liveness_tokens_share_state() {
        let live = Liveness::new();
        let token = live.token();
        assert!(token.is_alive());
        live.end();
        assert!(!token.is_alive());
        live.end();
        assert!(!live.is_alive());
    }

    #[test]
    fn manual_scheduler_fires_on_period() {
        let mut scheduler = ManualScheduler::new();
        let hits = Rc::new(Cell::new(0));
        let counter = Rc::clone(&hits);
        scheduler.schedule_repeating(
            Duration::from_millis(100),
            Box::new(move || counter.set(counter.get() + 1)),
        );

        scheduler.advance(Duration::from_millis(99));
        assert_eq!(hits.get(), 0);
        scheduler.advance(Duration::from_millis(1));
        assert_eq!(hits.get(), 1);
        scheduler.advance(Duration::from_millis(350));
        assert_eq!(hits.get(), 4);
        assert_eq!(scheduler.now(), Duration::from_millis(450));
    }

    #[test]
    fn cancelled_timer_stops_firing() {
        let mut scheduler = ManualScheduler::new();
        let hits = Rc::new(Cell::new(0));
        let counter = Rc::clone(&hits);
        let id = scheduler.schedule_repeating(
            Duration::from_millis(10),
            Box::new(move || counter.set(counter.get() + 1)),
        );
        scheduler.advance(Duration::from_millis(10));
        scheduler.cancel(id);
        scheduler.advance(Duration::from_millis(100));

        assert_eq!(hits.get(), 1);
        assert_eq!(scheduler.active_timers(), 0);
    }
}
