//! Time source for timers and animators
//!
//! All timestamps are seconds on a monotonic timeline with an arbitrary
//! origin. The event loop that owns the view supplies the clock.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;

/// Monotonic time source in seconds
pub trait Clock {
    fn now(&self) -> f64;
}

/// Clock backed by [`Instant`], measured from construction
#[derive(Clone, Copy, Debug)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }
}

/// Clock advanced by hand
///
/// Clones share the same time, so a test can keep one handle while the
/// scroller owns another.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    now: Rc<Cell<f64>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the absolute time in seconds
    pub fn set(&self, seconds: f64) {
        self.now.set(seconds);
    }

    /// Move time forward by `seconds`
    pub fn advance(&self, seconds: f64) {
        self.now.set(self.now.get() + seconds);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> f64 {
        self.now.get()
    }
}
