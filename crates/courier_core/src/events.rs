//! Combined-scroller event flags
//!
//! Everything that can move the combined scroll position is reported as a
//! bit in an [`EventMask`]. Flags fall into two classes: *immediate* events
//! are applied synchronously, *pending* events are coalesced through short
//! debounce timers before they re-enter the immediate path.

use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not};

/// Bit set of scroll-affecting events
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct EventMask {
    bits: u32,
}

impl EventMask {
    pub const NONE: EventMask = EventMask { bits: 0 };

    /// Finger moved past the drag threshold
    pub const DRAG_START: EventMask = EventMask { bits: 1 };
    /// Drag sample after the drag started
    pub const DRAGGING: EventMask = EventMask { bits: 1 << 1 };

    /// Native scroll container changed size
    pub const MAIN_SCROLLER_RESIZE: EventMask = EventMask { bits: 1 << 2 };
    /// Content inside the native scroll container changed size
    pub const MAIN_CONTENT_RESIZE: EventMask = EventMask { bits: 1 << 3 };

    /// Embedded body content changed size
    pub const EMBEDDED_CONTENT_RESIZE: EventMask = EventMask { bits: 1 << 4 };

    /// First layout pass of the view
    pub const INITIALIZE: EventMask = EventMask { bits: 1 << 5 };

    /// Raw drag flags. These never force a layout pass.
    pub const DRAG_EVENTS: EventMask = EventMask {
        bits: Self::DRAG_START.bits | Self::DRAGGING.bits,
    };

    /// Flags applied synchronously
    pub const IMMEDIATE_EVENTS: EventMask = EventMask {
        bits: Self::DRAG_EVENTS.bits
            | Self::MAIN_SCROLLER_RESIZE.bits
            | Self::MAIN_CONTENT_RESIZE.bits,
    };

    /// Flags coalesced through debounce timers
    pub const PENDING_EVENTS: EventMask = EventMask {
        bits: Self::EMBEDDED_CONTENT_RESIZE.bits | Self::INITIALIZE.bits,
    };

    /// Flags that require bounds to be re-measured
    pub const RESIZE_EVENTS: EventMask = EventMask {
        bits: Self::MAIN_SCROLLER_RESIZE.bits
            | Self::MAIN_CONTENT_RESIZE.bits
            | Self::EMBEDDED_CONTENT_RESIZE.bits,
    };

    /// Create from raw bits
    pub const fn from_bits(bits: u32) -> Self {
        Self { bits }
    }

    /// Raw bits
    pub const fn bits(&self) -> u32 {
        self.bits
    }

    pub const fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Check whether any flag of `other` is set
    pub const fn intersects(&self, other: EventMask) -> bool {
        self.bits & other.bits != 0
    }

    /// Check whether every flag of `other` is set
    pub const fn contains(&self, other: EventMask) -> bool {
        self.bits & other.bits == other.bits
    }

    pub fn insert(&mut self, other: EventMask) {
        self.bits |= other.bits;
    }

    pub fn remove(&mut self, other: EventMask) {
        self.bits &= !other.bits;
    }

    /// Flags of `self` that are not in `other`
    pub const fn difference(&self, other: EventMask) -> EventMask {
        EventMask {
            bits: self.bits & !other.bits,
        }
    }
}

impl BitOr for EventMask {
    type Output = EventMask;

    fn bitor(self, rhs: Self) -> Self::Output {
        EventMask {
            bits: self.bits | rhs.bits,
        }
    }
}

impl BitOrAssign for EventMask {
    fn bitor_assign(&mut self, rhs: Self) {
        self.bits |= rhs.bits;
    }
}

impl BitAnd for EventMask {
    type Output = EventMask;

    fn bitand(self, rhs: Self) -> Self::Output {
        EventMask {
            bits: self.bits & rhs.bits,
        }
    }
}

impl BitAndAssign for EventMask {
    fn bitand_assign(&mut self, rhs: Self) {
        self.bits &= rhs.bits;
    }
}

impl Not for EventMask {
    type Output = EventMask;

    fn not(self) -> Self::Output {
        EventMask { bits: !self.bits }
    }
}

impl fmt::Debug for EventMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const NAMES: [(EventMask, &str); 6] = [
            (EventMask::DRAG_START, "DRAG_START"),
            (EventMask::DRAGGING, "DRAGGING"),
            (EventMask::MAIN_SCROLLER_RESIZE, "MAIN_SCROLLER_RESIZE"),
            (EventMask::MAIN_CONTENT_RESIZE, "MAIN_CONTENT_RESIZE"),
            (EventMask::EMBEDDED_CONTENT_RESIZE, "EMBEDDED_CONTENT_RESIZE"),
            (EventMask::INITIALIZE, "INITIALIZE"),
        ];

        if self.is_empty() {
            return f.write_str("EventMask(NONE)");
        }

        let mut list = f.debug_set();
        for (flag, name) in NAMES {
            if self.contains(flag) {
                list.entry(&format_args!("{name}"));
            }
        }
        list.finish()
    }
}

/// A pointer sample delivered by the native scroll container
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    /// Canvas y coordinate in pixels
    pub y: i32,
    /// Event timestamp in milliseconds
    pub timestamp: u32,
}

impl PointerEvent {
    pub const fn new(y: i32, timestamp: u32) -> Self {
        Self { y, timestamp }
    }
}
