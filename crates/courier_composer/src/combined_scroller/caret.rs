//! Requests coming from the body editor and the native scroller
//!
//! Caret reports, the selection magnifier, rotation, and scrolls the native
//! scroller performed on its own all end up as a `show` or a `bring_in` on
//! the combined position.

use super::{CombinedScroller, PositionBackup};

impl CombinedScroller {
    /// The body editor reported a new caret
    ///
    /// `top` and `bottom` are in body coordinates. A collapsed caret clears
    /// the selection; without a magnifier it also leaves selection mode.
    pub fn caret_position_changed(&mut self, top: i32, bottom: i32, collapsed: bool) {
        if collapsed {
            self.caret.has_selection = false;
            if !self.caret.has_magnifier {
                self.caret.in_selection_mode = false;
            }
        } else {
            self.caret.has_selection = true;
        }

        self.handle_caret_change(top, bottom);
    }

    fn handle_caret_change(&mut self, top: i32, bottom: i32) {
        if !self.pending_mask.is_empty() {
            tracing::trace!(pending = ?self.pending_mask, "caret report deferred");
            self.caret.notify_caret_pos = true;
            return;
        }

        let content_top = self.state.header_height + top;
        let content_bottom = self.state.header_height + bottom;

        self.sync_with_embedded();

        let scroll_pos = self.state.scroll_pos;
        let edge = self.state.edge_scroll_pos;
        let toolbar_height = self.state.toolbar_height;
        let viewport_height = self.state.viewport.height;
        let padding = self.config.caret_padding();

        let visible_top = content_top - scroll_pos;
        let visible_bottom = content_bottom - scroll_pos;

        if visible_top <= toolbar_height || visible_bottom >= viewport_height {
            let mut target = if visible_top <= toolbar_height {
                content_top - toolbar_height - padding
            } else {
                content_bottom - viewport_height + padding
            };

            // Once the body fills the screen, the caret never drags the
            // header back into view.
            if self.state.is_past_edge() && target < edge {
                target = edge;
            }

            tracing::debug!(top, bottom, target, "bring caret into view");
            if self.caret.has_selection || self.caret.has_magnifier {
                self.show(target);
            } else {
                self.bring_in(target);
            }
        } else if self.caret.bring_in_to_body && scroll_pos < edge {
            self.bring_in(edge);
        }

        self.caret.bring_in_to_body = false;
    }

    /// Scroll the body to the top edge on the next caret report
    pub fn request_bring_in_to_body(&mut self) {
        self.caret.bring_in_to_body = true;
    }

    /// The body started showing its selection magnifier
    pub fn magnifier_shown(&mut self) {
        self.caret.has_magnifier = true;
        self.freeze_push();

        if self.caret.has_selection {
            self.ensure_body_on_top(true);
        }
    }

    pub fn magnifier_hidden(&mut self) {
        self.caret.has_magnifier = false;
        self.freeze_pop();
    }

    /// Enter text selection mode, pulling the body up to the top edge
    pub fn activate_selection_mode(&mut self) {
        if !self.ready {
            return;
        }

        if !self.caret.in_selection_mode {
            self.caret.in_selection_mode = true;
            self.ensure_body_on_top(true);
        }
    }

    /// Move the header out of the way if the body is not yet at the top
    ///
    /// With `force` the move animates even while frozen; otherwise it jumps.
    pub fn ensure_body_on_top(&mut self, force: bool) {
        if self.state.is_past_edge() {
            return;
        }

        let edge = self.state.edge_scroll_pos;
        if force {
            let freeze_count = std::mem::take(&mut self.freeze_count);
            self.bring_in(edge);
            self.freeze_count = freeze_count;
        } else {
            self.show(edge);
        }
    }

    /// Remember the current position so the next resolves keep it
    pub fn backup_scroll_pos(&mut self) {
        self.backup = Some(PositionBackup {
            scroll_pos: self.state.scroll_pos,
            time: self.clock.now(),
        });
    }

    /// The device is about to rotate
    ///
    /// Stops all motion. When the body is selected it is pinned on top and
    /// the position is kept across the resizes that follow.
    pub fn prepare_rotation(&mut self, body_selected: bool) {
        self.stop_all();

        if body_selected {
            self.ensure_body_on_top(false);
            self.backup_scroll_pos();
        }
    }

    /// The native scroller moved by itself
    ///
    /// The native offset is put back where the combined position wants it,
    /// then the combined position animates toward where the native scroller
    /// tried to go.
    pub fn main_scroller_scrolled(&mut self) {
        let region_y = self.hosts.scroller.region_y();
        if region_y == self.state.main_scroll_pos {
            return;
        }

        tracing::debug!(
            region_y,
            main = self.state.main_scroll_pos,
            "native scroller moved, restoring"
        );
        self.sync_with_embedded();
        self.set_pos(self.state.scroll_pos);

        if self.motion.is_none() {
            let target = if region_y < self.state.edge_scroll_pos {
                region_y
            } else {
                region_y + self.hosts.body.scroll_pos()
            };
            self.bring_in(target);
        }
    }
}
