//! Courier Composer
//!
//! The composer's initial view shows recipient and subject fields in a
//! native scroller and the message body in an embedded web view. This crate
//! keeps the two scrolling as one document.
//!
//! - [`CombinedScroller`]: event handling, position resolution, fling and
//!   bring-in motion, drag tracking, toolbar pinning, and caret tracking
//! - [`ScrollerConfig`]: tuning constants, loadable from TOML

pub mod combined_scroller;
pub mod config;
pub mod error;

pub use combined_scroller::{
    CaretState, CombinedScroller, DragSession, MotionState, PositionBackup, ScrollState,
    ScrollerHosts,
};
pub use config::ScrollerConfig;
pub use error::{ConfigError, Result};

pub use courier_animation::{MotionPlan, Tick};
pub use courier_core::{EventMask, PointerEvent};
