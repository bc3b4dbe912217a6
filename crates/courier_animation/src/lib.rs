//! Courier Animation System
//!
//! Closed-form scroll kinematics, animator timelines, and debounce timers.
//!
//! # Features
//!
//! - **Fling**: constant-deceleration motion after a drag release
//! - **Bring-in**: two-phase eased motion landing exactly on a target
//! - **Timelines**: normalized progress over a fixed duration, ticked per frame
//! - **Interruptible**: a new bring-in inherits the velocity of the one it replaces

pub mod kinematics;
pub mod scheduler;
pub mod timeline;

pub use kinematics::{BringInParams, MotionKind, MotionPlan};
pub use scheduler::{TimerId, TimerQueue};
pub use timeline::{Tick, Timeline};
