//! Scroll geometry and gesture state owned by the combined scroller

use courier_platform::ViewportGeometry;

/// Geometry and positions of the combined scroll
///
/// After every resolve, `scroll_pos == main_scroll_pos + embedded_scroll_pos`
/// and `0 <= scroll_pos <= max_scroll_pos`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollState {
    /// Combined logical offset
    pub scroll_pos: i32,
    /// Offset pushed to the native scroller
    pub main_scroll_pos: i32,
    /// Offset pushed to the body view's internal scroll
    pub embedded_scroll_pos: i32,
    /// Upper bound of `scroll_pos`
    pub max_scroll_pos: i32,
    /// Upper bound of the body view's internal scroll
    pub max_embedded_scroll_pos: i32,
    /// Combined offset at which the toolbar reaches the top
    pub edge_scroll_pos: i32,
    /// Height of everything above the body view
    pub header_height: i32,
    pub toolbar_height: i32,
    /// Last measured height of the body view widget
    pub embedded_height: i32,
    pub viewport: ViewportGeometry,
}

impl ScrollState {
    /// Clamp `y` into `[0, max_scroll_pos]`
    pub fn fix_pos(&self, y: i32) -> i32 {
        if y < 0 {
            0
        } else if y > self.max_scroll_pos {
            self.max_scroll_pos.max(0)
        } else {
            y
        }
    }

    /// Combined offset past which the body view scrolls internally
    pub fn split_pos(&self) -> i32 {
        (self.embedded_height - self.viewport.height - self.toolbar_height) / 2
            + self.header_height
    }

    /// Split a clamped combined offset into (main, embedded) offsets
    pub fn split(&self, scroll_pos: i32) -> (i32, i32) {
        let edge_pos = self.split_pos();

        if scroll_pos > edge_pos {
            let embedded = scroll_pos - edge_pos;
            if embedded > self.max_embedded_scroll_pos {
                let embedded = self.max_embedded_scroll_pos;
                (scroll_pos - embedded, embedded)
            } else {
                (edge_pos, embedded)
            }
        } else {
            (scroll_pos, 0)
        }
    }

    /// Whether the header has scrolled out past the toolbar edge
    pub fn is_past_edge(&self) -> bool {
        self.scroll_pos >= self.edge_scroll_pos
    }
}

/// A pointer press on the native scroller
///
/// Lives from pointer-down to pointer-up (or a freeze). Becomes a drag once
/// the finger travels past the drag threshold.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragSession {
    pub is_dragging: bool,
    /// Canvas y where the finger went down
    pub down_y: i32,
    /// Canvas y where the drag was recognized
    pub start_y: i32,
    pub cur_y: i32,
    /// Timestamp of the last sample in milliseconds
    pub cur_time: u32,
    /// Content-space point under the finger when the drag started
    pub content_anchor_y: i32,
    /// Last instantaneous velocity in px/s, content direction
    pub velocity: f32,
}

impl DragSession {
    pub fn new(y: i32, timestamp: u32) -> Self {
        Self {
            down_y: y,
            cur_y: y,
            cur_time: timestamp,
            ..Default::default()
        }
    }
}

/// Selection and caret bookkeeping for the body editor
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CaretState {
    /// Ask the body to re-report its caret once pending events settle
    pub notify_caret_pos: bool,
    /// Bring the body to the top edge on the next caret report
    pub bring_in_to_body: bool,
    pub in_selection_mode: bool,
    pub has_selection: bool,
    pub has_magnifier: bool,
}

/// Position remembered before a caret-driven relayout
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PositionBackup {
    pub scroll_pos: i32,
    /// Clock time when the backup was taken
    pub time: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> ScrollState {
        // 400px header, 40px toolbar, 800px body scrolling 1200px more,
        // 600px viewport.
        ScrollState {
            header_height: 400,
            toolbar_height: 40,
            embedded_height: 800,
            max_embedded_scroll_pos: 1200,
            edge_scroll_pos: 360,
            max_scroll_pos: 1200 - 600 + 1200,
            viewport: ViewportGeometry::new(0, 480, 600),
            ..Default::default()
        }
    }

    #[test]
    fn test_fix_pos_clamps() {
        let state = state();
        assert_eq!(state.fix_pos(-10), 0);
        assert_eq!(state.fix_pos(500), 500);
        assert_eq!(state.fix_pos(99_999), state.max_scroll_pos);
    }

    #[test]
    fn test_fix_pos_with_negative_max() {
        let state = ScrollState {
            max_scroll_pos: -50,
            ..Default::default()
        };
        assert_eq!(state.fix_pos(10), 0);
    }

    #[test]
    fn test_split_before_and_after_edge() {
        let state = state();
        let edge = state.split_pos();
        assert_eq!(edge, (800 - 600 - 40) / 2 + 400);

        assert_eq!(state.split(100), (100, 0));
        assert_eq!(state.split(edge), (edge, 0));
        assert_eq!(state.split(edge + 30), (edge, 30));
    }

    #[test]
    fn test_split_saturates_embedded() {
        let state = state();
        let (main, embedded) = state.split(state.max_scroll_pos);
        assert_eq!(embedded, 1200);
        assert_eq!(main + embedded, state.max_scroll_pos);
    }

    #[test]
    fn test_drag_session_new() {
        let session = DragSession::new(100, 42);
        assert!(!session.is_dragging);
        assert_eq!(session.down_y, 100);
        assert_eq!(session.cur_y, 100);
        assert_eq!(session.cur_time, 42);
    }
}
