//! Event classification and debouncing

use courier_core::EventMask;

use super::CombinedScroller;

impl CombinedScroller {
    /// Feed scroll-affecting events
    ///
    /// Immediate events are applied synchronously as one batch. Before the
    /// batch runs, non-drag events force a layout pass on the native
    /// scroller. Immediate events raised by that pass join the batch;
    /// pending ones are scheduled before the batch runs, so the batch sees
    /// them as outstanding. Pending events (re)start their debounce timer
    /// and are applied when it fires.
    pub fn handle_event(&mut self, mask: EventMask) {
        if mask.intersects(EventMask::IMMEDIATE_EVENTS) {
            let mut batch = mask;

            let layout_events = EventMask::IMMEDIATE_EVENTS.difference(EventMask::DRAG_EVENTS);
            if mask.intersects(layout_events) {
                let raised = self.hosts.scroller.calculate_layout();
                if !raised.is_empty() {
                    tracing::trace!(?raised, "events raised during layout");
                    batch |= raised & EventMask::IMMEDIATE_EVENTS;
                    if raised.intersects(EventMask::PENDING_EVENTS) {
                        self.schedule_pending(raised & EventMask::PENDING_EVENTS);
                    }
                }
            }

            self.update(batch);
        }

        if mask.intersects(EventMask::PENDING_EVENTS) {
            self.schedule_pending(mask);
        }
    }

    fn schedule_pending(&mut self, mask: EventMask) {
        let now = self.clock.now();

        if mask.contains(EventMask::EMBEDDED_CONTENT_RESIZE) {
            if let Some(id) = self.content_resize_timer.take() {
                self.timers.cancel(id);
            }
            let deadline = now + self.config.content_resize_delay;
            self.content_resize_timer =
                Some(self.timers.add(deadline, EventMask::EMBEDDED_CONTENT_RESIZE));
        }

        if mask.contains(EventMask::INITIALIZE) {
            if let Some(id) = self.initialize_timer.take() {
                self.timers.cancel(id);
            }
            let deadline = now + self.config.initialize_delay;
            self.initialize_timer = Some(self.timers.add(deadline, EventMask::INITIALIZE));
        }

        self.pending_mask |= mask & EventMask::PENDING_EVENTS;
    }

    /// When the next debounce timer is due, in clock seconds
    pub fn next_timer_deadline(&self) -> Option<f64> {
        self.timers.next_deadline()
    }

    /// Fire every debounce timer that is due
    ///
    /// Each fired flag leaves the pending set and is applied on its own.
    /// Returns how many timers fired.
    pub fn fire_timers(&mut self) -> usize {
        let now = self.clock.now();
        let due = self.timers.take_due(now);
        let fired = due.len();

        for (id, flag) in due {
            if self.content_resize_timer == Some(id) {
                self.content_resize_timer = None;
            }
            if self.initialize_timer == Some(id) {
                self.initialize_timer = None;
            }

            self.pending_mask.remove(flag);
            tracing::trace!(?flag, "debounce timer fired");
            self.update(flag);
        }

        fired
    }
}
