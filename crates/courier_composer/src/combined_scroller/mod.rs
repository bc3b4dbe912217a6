//! Combined scroller for the composer view
//!
//! The composer shows its header fields (recipients, subject, toolbar) in a
//! native scroll container and the message body in an embedded web view that
//! scrolls on its own. The combined scroller drives both so they read as one
//! continuous document with a single scroll position.
//!
//! # Flow
//!
//! ```text
//! pointer / resize events ──► classifier ──► tracker (update) ──► resolver (set_pos)
//!                                  │                                   ▲
//!                       debounce timers (pending)                      │
//! pointer up / bring_in ──► motion plan ──► animate() per frame ───────┘
//! ```
//!
//! The scroller never blocks and never schedules anything itself. The owning
//! event loop calls [`CombinedScroller::animate`] every frame while it
//! returns [`Tick::Continue`] and [`CombinedScroller::fire_timers`] once
//! [`CombinedScroller::next_timer_deadline`] has passed.
//!
//! # Example
//!
//! ```rust,ignore
//! use courier_composer::{CombinedScroller, ScrollerConfig, ScrollerHosts};
//!
//! let mut scroller = CombinedScroller::new(hosts, ScrollerConfig::default());
//! scroller.start();
//!
//! // in the event loop
//! if scroller.is_animating() {
//!     scroller.animate();
//! }
//! scroller.fire_timers();
//! ```

mod caret;
mod classifier;
mod drag;
mod motion;
mod resolver;
mod state;
mod toolbar;
mod tracker;

pub use motion::MotionState;
pub use state::{CaretState, DragSession, PositionBackup, ScrollState};

use courier_animation::{MotionPlan, Tick, TimerId, TimerQueue, Timeline};
use courier_core::{Clock, EventMask, MonotonicClock};
use courier_platform::{EmbeddedContentHost, ScrollHost, ScrollIndicator, ToolbarHost};

use crate::config::ScrollerConfig;

/// The widgets the combined scroller drives
pub struct ScrollerHosts {
    /// Native scroll container holding header and body
    pub scroller: Box<dyn ScrollHost>,
    /// Embedded body view
    pub body: Box<dyn EmbeddedContentHost>,
    /// Rich-text toolbar, when the composer shows one
    pub toolbar: Option<Box<dyn ToolbarHost>>,
    /// Scrollbar for the combined position
    pub indicator: Box<dyn ScrollIndicator>,
}

/// An armed animator and the flight it plays
struct ActiveMotion {
    plan: MotionPlan,
    timeline: Timeline,
}

/// One scroll position over a native scroller and an embedded body view
pub struct CombinedScroller {
    config: ScrollerConfig,
    hosts: ScrollerHosts,
    clock: Box<dyn Clock>,

    state: ScrollState,
    ready: bool,
    /// Custom-scroll lifecycle is open on the body view
    is_scrolling: bool,
    freeze_count: u32,

    drag: Option<DragSession>,
    motion: Option<ActiveMotion>,

    pending_mask: EventMask,
    timers: TimerQueue<EventMask>,
    content_resize_timer: Option<TimerId>,
    initialize_timer: Option<TimerId>,

    /// Height of the flow placeholder while the toolbar is pinned
    toolbar_placeholder: Option<i32>,

    caret: CaretState,
    backup: Option<PositionBackup>,
}

impl CombinedScroller {
    /// Create a scroller timed by the system monotonic clock
    pub fn new(hosts: ScrollerHosts, config: ScrollerConfig) -> Self {
        Self::with_clock(hosts, config, MonotonicClock::new())
    }

    /// Create a scroller timed by `clock`
    pub fn with_clock(
        hosts: ScrollerHosts,
        config: ScrollerConfig,
        clock: impl Clock + 'static,
    ) -> Self {
        Self {
            config,
            hosts,
            clock: Box::new(clock),
            state: ScrollState::default(),
            ready: false,
            is_scrolling: false,
            freeze_count: 0,
            drag: None,
            motion: None,
            pending_mask: EventMask::NONE,
            timers: TimerQueue::new(),
            content_resize_timer: None,
            initialize_timer: None,
            toolbar_placeholder: None,
            caret: CaretState::default(),
            backup: None,
        }
    }

    /// Schedule initialization
    ///
    /// Call once all hosts are wired. The scroller becomes ready after the
    /// initialization delay, giving the body content its first layout pass.
    pub fn start(&mut self) {
        self.handle_event(EventMask::INITIALIZE);
    }

    pub fn config(&self) -> &ScrollerConfig {
        &self.config
    }

    pub fn state(&self) -> &ScrollState {
        &self.state
    }

    /// Whether the first measurement has happened
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn caret_state(&self) -> &CaretState {
        &self.caret
    }

    /// Active pointer press, if any
    pub fn drag_session(&self) -> Option<&DragSession> {
        self.drag.as_ref()
    }

    /// Flight played by the armed animator, if any
    pub fn motion_plan(&self) -> Option<&MotionPlan> {
        self.motion.as_ref().map(|motion| &motion.plan)
    }

    /// Whether an animator is armed
    pub fn is_animating(&self) -> bool {
        self.motion.is_some()
    }

    pub fn freeze_count(&self) -> u32 {
        self.freeze_count
    }

    /// Pending-class events still waiting on their debounce timers
    pub fn pending_events(&self) -> EventMask {
        self.pending_mask
    }

    /// Whether the toolbar currently sits in the pinned overlay slot
    pub fn is_toolbar_pinned(&self) -> bool {
        self.toolbar_placeholder.is_some()
    }

    /// Whether the custom-scroll lifecycle is open on the body view
    pub fn is_scrolling(&self) -> bool {
        self.is_scrolling
    }

    pub fn hosts(&self) -> &ScrollerHosts {
        &self.hosts
    }

    pub fn hosts_mut(&mut self) -> &mut ScrollerHosts {
        &mut self.hosts
    }

    /// Advance the armed animator by one frame
    pub fn animate(&mut self) -> Tick {
        let now = self.clock.now();
        self.animator_tick(now)
    }

    fn begin_scroll(&mut self) {
        if self.is_scrolling {
            return;
        }
        self.is_scrolling = true;

        tracing::debug!("combined scroll begin");
        self.hosts.body.custom_scroll_begin();
    }

    fn end_scroll(&mut self) {
        if !self.is_scrolling {
            return;
        }
        self.is_scrolling = false;

        tracing::debug!("combined scroll end");
        self.hosts.body.custom_scroll_end();
    }

    fn stop_animator(&mut self) {
        if self.motion.take().is_some() {
            tracing::trace!("animator stopped");
        }
    }

    fn stop_dragging(&mut self) {
        self.drag = None;
    }

    fn stop_all(&mut self) {
        self.stop_animator();
        self.stop_dragging();
        self.end_scroll();
    }
}
