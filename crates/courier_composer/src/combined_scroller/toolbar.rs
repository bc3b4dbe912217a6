//! Toolbar edge pinning

use super::CombinedScroller;

impl CombinedScroller {
    /// Pin the toolbar once the header has scrolled past it, unpin when the
    /// native scroller comes back above the edge
    pub(super) fn update_toolbar_position(&mut self) {
        let main = self.state.main_scroll_pos;
        let edge = self.state.edge_scroll_pos;

        let Some(toolbar) = self.hosts.toolbar.as_mut() else {
            return;
        };

        match self.toolbar_placeholder {
            Some(_) if main < edge => {
                tracing::debug!(main, edge, "unpin toolbar");
                toolbar.unpin();
                self.toolbar_placeholder = None;
            }
            None if main >= edge => {
                let height = toolbar.height();
                tracing::debug!(main, edge, height, "pin toolbar to top");
                toolbar.pin(height);
                self.toolbar_placeholder = Some(height);
            }
            _ => {}
        }
    }
}
