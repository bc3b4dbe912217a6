//! Courier Core
//!
//! Foundational types shared by the Courier composer crates:
//!
//! - **Event flags**: the immediate/pending event classes that drive the
//!   combined scroller
//! - **Clock**: an injectable monotonic time source for timers and animators
//! - **Geometry**: pixel rectangles exchanged with widget hosts

pub mod clock;
pub mod events;
pub mod geometry;

pub use clock::{Clock, ManualClock, MonotonicClock};
pub use events::{EventMask, PointerEvent};
pub use geometry::Rect;
