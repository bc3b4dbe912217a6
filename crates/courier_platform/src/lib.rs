//! Courier Platform Abstraction
//!
//! Narrow interfaces to the widgets the combined scroller drives. A toolkit
//! backend implements these over its live widget tree; tests implement them
//! over plain structs.

pub mod scroller;
pub mod webview;

pub use scroller::{ScrollHost, ScrollIndicator, ToolbarHost, ViewportGeometry};
pub use webview::EmbeddedContentHost;
