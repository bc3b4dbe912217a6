//! Native scroll container, rich-text toolbar, and scrollbar indicator

use courier_core::EventMask;

/// Viewport of the native scroll container in canvas pixels
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ViewportGeometry {
    /// Top edge on the canvas
    pub top: i32,
    pub width: i32,
    pub height: i32,
}

impl ViewportGeometry {
    pub const fn new(top: i32, width: i32, height: i32) -> Self {
        Self { top, width, height }
    }
}

/// The native scroll container holding the header fields and the body view
///
/// Geometry queries always answer, possibly with zeros.
pub trait ScrollHost {
    /// Position and size of the scroller viewport
    fn viewport(&self) -> ViewportGeometry;

    /// Height of the laid-out content inside the scroller
    fn content_height(&self) -> i32;

    /// Current vertical offset of the visible region
    fn region_y(&self) -> i32;

    /// Move the visible region
    fn show_region(&mut self, x: i32, y: i32, width: i32, height: i32);

    /// Force a synchronous layout pass over the widget tree
    ///
    /// Returns the scroll events raised while the layout settled (for
    /// example a content resize). The caller folds them into the batch it
    /// is already processing.
    fn calculate_layout(&mut self) -> EventMask;
}

/// The rich-text toolbar that pins to the top once the header scrolls away
pub trait ToolbarHost {
    fn height(&self) -> i32;

    /// Move the toolbar into the fixed overlay slot and insert a placeholder
    /// of `placeholder_height` in its place in the scrolling flow
    fn pin(&mut self, placeholder_height: i32);

    /// Remove the placeholder and return the toolbar to the scrolling flow
    fn unpin(&mut self);
}

/// Visual scrollbar for the combined position. Display only.
pub trait ScrollIndicator {
    /// Thumb length as a fraction of the track
    fn set_drag_size(&mut self, size: f64);

    /// Thumb position as a fraction of the track
    fn set_drag_value(&mut self, value: f64);

    /// Signal that a scroll happened so the bar shows itself
    fn emit_scroll(&mut self);
}
