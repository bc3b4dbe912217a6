//! Fixed-duration animator timeline
//!
//! A timeline maps wall-clock time onto a normalized progress value in
//! `[0, 1]`. The owning event loop calls the animation's tick function once
//! per frame; the tick reads the progress, applies it, and answers whether
//! it wants another frame.

/// Result of an animator tick
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    /// Re-arm: call again on the next frame
    Continue,
    /// Finished or cancelled; do not call again
    Done,
}

impl Tick {
    pub fn is_done(&self) -> bool {
        matches!(self, Tick::Done)
    }
}

/// A running animator with a start time and a duration in seconds
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Timeline {
    start: f64,
    duration: f64,
}

impl Timeline {
    /// Start a timeline at `start` lasting `duration` seconds
    pub fn new(start: f64, duration: f64) -> Self {
        Self {
            start,
            duration: duration.max(0.0),
        }
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Normalized progress in `[0, 1]`
    ///
    /// A zero-length timeline is complete as soon as it is sampled.
    pub fn position(&self, now: f64) -> f64 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        ((now - self.start) / self.duration).clamp(0.0, 1.0)
    }

    /// Elapsed seconds, clamped to the duration
    pub fn elapsed(&self, now: f64) -> f64 {
        self.position(now) * self.duration
    }

    pub fn is_finished(&self, now: f64) -> bool {
        self.position(now) >= 1.0
    }
}
