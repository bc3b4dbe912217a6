//! Position resolution: split the combined offset between the two scrollers

use courier_core::Rect;

use super::CombinedScroller;

impl CombinedScroller {
    /// Resolve a combined position and push it to every host
    ///
    /// The target is clamped into range, split between the native scroller
    /// and the body view, and followed by the indicator, toolbar pinning and
    /// the body's visible-rect notification. Ignored until ready.
    pub fn set_pos(&mut self, y: i32) {
        if !self.ready {
            return;
        }

        self.state.scroll_pos = self.state.fix_pos(y);
        self.state.embedded_height = self.hosts.body.height();

        let (main, embedded) = self.state.split(self.state.scroll_pos);
        self.state.main_scroll_pos = main;
        self.state.embedded_scroll_pos = embedded;

        let viewport = self.state.viewport;
        self.hosts
            .scroller
            .show_region(0, main, viewport.width, viewport.height);
        self.hosts.body.set_scroll(0, embedded);

        tracing::trace!(
            scroll_pos = self.state.scroll_pos,
            main,
            embedded,
            "position resolved"
        );

        self.update_indicator();
        self.update_toolbar_position();
        self.notify_visible_rect();
    }

    fn update_indicator(&mut self) {
        let height = f64::from(self.state.viewport.height);
        let max = f64::from(self.state.max_scroll_pos.max(0));

        let size = if height + max > 0.0 {
            height / (height + max)
        } else {
            1.0
        };
        let value = if max > 0.0 {
            f64::from(self.state.scroll_pos) / max
        } else {
            0.0
        };

        let indicator = &mut self.hosts.indicator;
        indicator.set_drag_size(size);
        indicator.set_drag_value(value);
        indicator.emit_scroll();
    }

    /// Tell the body which part of it is on screen, below the toolbar band
    fn notify_visible_rect(&mut self) {
        let state = &self.state;
        let viewport = state.viewport;

        let min_y = viewport.top + state.toolbar_height;
        let y = (viewport.top + state.header_height - state.scroll_pos).max(min_y);
        let height = (viewport.top + viewport.height - y).max(0);

        self.hosts
            .body
            .visible_content_changed(Rect::new(0, y, viewport.width, height));
    }
}
