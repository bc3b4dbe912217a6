//! Drag handler: pointer down/move/up on the native scroller

use courier_core::{EventMask, PointerEvent};

use super::{CombinedScroller, DragSession};

impl CombinedScroller {
    /// Finger down on the scroller
    pub fn pointer_down(&mut self, event: PointerEvent) {
        if !self.ready || self.drag.is_some() || self.freeze_count > 0 {
            return;
        }

        self.drag = Some(DragSession::new(event.y, event.timestamp));
        self.stop_animator();
        self.begin_scroll();
        tracing::trace!(y = event.y, "slide start");
    }

    /// Finger moved
    ///
    /// Moves within the drag threshold only refresh the last sample. Past
    /// it, the slide becomes a drag and every move drives the position.
    pub fn pointer_move(&mut self, event: PointerEvent) {
        let threshold = self.config.drag_threshold();
        let Some(drag) = self.drag.as_mut() else {
            return;
        };

        let mut mask = EventMask::DRAGGING;

        if !drag.is_dragging {
            if (event.y - drag.down_y).abs() > threshold {
                drag.is_dragging = true;
                drag.start_y = drag.cur_y;
                mask |= EventMask::DRAG_START;
                tracing::debug!(down_y = drag.down_y, y = event.y, "drag start");
            } else {
                drag.cur_y = event.y;
                drag.cur_time = event.timestamp;
                return;
            }
        }

        let dt = event.timestamp.wrapping_sub(drag.cur_time);
        if dt > 0 {
            // Content moves against the finger.
            drag.velocity = -1000.0 * (event.y - drag.cur_y) as f32 / dt as f32;
        }
        drag.cur_y = event.y;
        drag.cur_time = event.timestamp;

        tracing::trace!(y = event.y, velocity = drag.velocity, "dragging");
        self.handle_event(mask);
    }

    /// Finger lifted: coast with the last drag velocity, if any
    pub fn pointer_up(&mut self, event: PointerEvent) {
        let Some(drag) = self.drag.take() else {
            return;
        };

        tracing::trace!(y = event.y, dragging = drag.is_dragging, "slide end");

        if !(drag.is_dragging && self.start_fling(drag.velocity)) {
            self.end_scroll();
        }
    }
}
