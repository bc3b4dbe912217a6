//! Geometry tracking: re-measure bounds and derive the next scroll target

use courier_core::EventMask;

use super::CombinedScroller;

impl CombinedScroller {
    /// Apply a batch of events to the tracked geometry and resolve the new
    /// position
    pub(super) fn update(&mut self, mut mask: EventMask) {
        let mut new_scroll_pos = 0;
        let mut need_set_pos = false;

        self.sync_with_embedded();

        if mask.contains(EventMask::INITIALIZE) {
            mask |= EventMask::RESIZE_EVENTS;
            self.ready = true;
            tracing::debug!("combined scroller ready");
        }

        if mask.contains(EventMask::DRAG_START) {
            let scroll_pos = self.state.scroll_pos;
            let top = self.state.viewport.top;
            if let Some(drag) = self.drag.as_mut() {
                drag.content_anchor_y = drag.start_y - top + scroll_pos;
            }
        }

        if mask.intersects(EventMask::RESIZE_EVENTS) {
            let main_content_height = self.hosts.scroller.content_height();
            let embedded_height = self.hosts.body.height();
            self.state.embedded_height = embedded_height;

            if mask.contains(EventMask::MAIN_SCROLLER_RESIZE) {
                self.state.viewport = self.hosts.scroller.viewport();
                self.caret.notify_caret_pos |= self.state.viewport.height < embedded_height;
            }

            if mask.contains(EventMask::MAIN_CONTENT_RESIZE) {
                self.state.toolbar_height = self
                    .hosts
                    .toolbar
                    .as_ref()
                    .map_or(0, |toolbar| toolbar.height());
            }

            if mask.intersects(EventMask::EMBEDDED_CONTENT_RESIZE | EventMask::MAIN_CONTENT_RESIZE) {
                self.state.max_embedded_scroll_pos = self.hosts.body.scroll_size();
            }

            let old_edge_scroll_pos = self.state.edge_scroll_pos;
            self.state.header_height = main_content_height - embedded_height;
            self.state.edge_scroll_pos = self.state.header_height - self.state.toolbar_height;
            self.state.max_scroll_pos = main_content_height - self.state.viewport.height
                + self.state.max_embedded_scroll_pos;

            tracing::trace!(
                header = self.state.header_height,
                edge = self.state.edge_scroll_pos,
                max = self.state.max_scroll_pos,
                "bounds re-measured"
            );

            let scroll_pos = self.state.scroll_pos;
            new_scroll_pos = if let Some(target) = self.drag_target() {
                target
            } else if scroll_pos > 0 && scroll_pos >= old_edge_scroll_pos {
                // Keep the body where it was on screen when the header
                // height changes underneath it.
                scroll_pos + self.state.edge_scroll_pos - old_edge_scroll_pos
            } else {
                scroll_pos
            };
            need_set_pos = true;
        }

        if mask.contains(EventMask::DRAGGING) {
            if let Some(target) = self.drag_target() {
                new_scroll_pos = target;
                need_set_pos = true;
            }
        }

        if need_set_pos {
            if let Some(backup) = self.backup {
                if self.clock.now() - backup.time < self.config.caret_backup_timeout {
                    new_scroll_pos = backup.scroll_pos;
                }
            }
            self.set_pos(new_scroll_pos);
        }

        if self.pending_mask.is_empty() {
            if self.caret.notify_caret_pos && self.hosts.body.has_focus() {
                self.hosts.body.notify_caret_position();
            }
            self.caret.notify_caret_pos = false;
        }
    }

    /// Scroll position that keeps the content anchor under the finger
    fn drag_target(&self) -> Option<i32> {
        self.drag
            .filter(|drag| drag.is_dragging)
            .map(|drag| drag.content_anchor_y - drag.cur_y + self.state.viewport.top)
    }

    /// Accept the body view's own scroll offset
    ///
    /// The body may scroll itself (for example to reveal a focused field).
    /// Its offset wins over the tracked one.
    pub(super) fn sync_with_embedded(&mut self) {
        let embedded_pos = self.hosts.body.scroll_pos();
        let new_scroll_pos = self.state.main_scroll_pos + embedded_pos;

        self.state.embedded_scroll_pos = embedded_pos;
        if new_scroll_pos != self.state.scroll_pos {
            tracing::debug!(
                embedded_pos,
                from = self.state.scroll_pos,
                to = new_scroll_pos,
                "combined position changed by body scroll"
            );
            self.state.scroll_pos = new_scroll_pos;
        }
    }
}
