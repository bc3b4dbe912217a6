//! Embedded web content that renders and edits the message body

use courier_core::Rect;

/// The embedded body view
///
/// The view owns its internal scroll offset; the combined scroller reads it
/// back before every update rather than assuming it is unchanged.
pub trait EmbeddedContentHost {
    /// Laid-out height of the view widget
    fn height(&self) -> i32;

    /// Current internal scroll offset
    fn scroll_pos(&self) -> i32;

    /// Maximum internal scroll offset
    fn scroll_size(&self) -> i32;

    /// Set the internal scroll offset
    fn set_scroll(&mut self, x: i32, y: i32);

    /// Whether the body editor holds keyboard focus
    fn has_focus(&self) -> bool;

    /// Ask the content to report its caret position again
    fn notify_caret_position(&mut self);

    /// The part of the view visible on screen changed
    fn visible_content_changed(&mut self, rect: Rect);

    /// A programmatic scroll is starting; content may suppress its own
    /// scroll-driven side effects until the matching end
    fn custom_scroll_begin(&mut self);

    fn custom_scroll_end(&mut self);
}
