//! One-shot timer queue
//!
//! Holds debounce timers for the owning event loop. Timers are keyed by
//! slot so a caller can cancel and re-arm its own handle without touching
//! anybody else's.

use slotmap::{new_key_type, SlotMap};

new_key_type! {
    pub struct TimerId;
}

struct Timer<T> {
    deadline: f64,
    payload: T,
}

/// Queue of one-shot timers carrying a payload
pub struct TimerQueue<T> {
    timers: SlotMap<TimerId, Timer<T>>,
}

impl<T> TimerQueue<T> {
    pub fn new() -> Self {
        Self {
            timers: SlotMap::with_key(),
        }
    }

    /// Arm a timer firing at `deadline` (seconds)
    pub fn add(&mut self, deadline: f64, payload: T) -> TimerId {
        self.timers.insert(Timer { deadline, payload })
    }

    /// Cancel a timer, returning its payload if it was still armed
    pub fn cancel(&mut self, id: TimerId) -> Option<T> {
        self.timers.remove(id).map(|timer| timer.payload)
    }

    pub fn is_armed(&self, id: TimerId) -> bool {
        self.timers.contains_key(id)
    }

    /// Earliest deadline among armed timers
    pub fn next_deadline(&self) -> Option<f64> {
        self.timers
            .values()
            .map(|timer| timer.deadline)
            .min_by(|a, b| a.total_cmp(b))
    }

    /// Remove and return every timer due at `now`, earliest first
    pub fn take_due(&mut self, now: f64) -> Vec<(TimerId, T)> {
        let mut due: Vec<(TimerId, f64)> = self
            .timers
            .iter()
            .filter(|(_, timer)| timer.deadline <= now)
            .map(|(id, timer)| (id, timer.deadline))
            .collect();
        due.sort_by(|a, b| a.1.total_cmp(&b.1));

        due.into_iter()
            .filter_map(|(id, _)| self.timers.remove(id).map(|timer| (id, timer.payload)))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
