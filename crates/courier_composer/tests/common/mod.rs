//! Fake widget hosts over one shared, inspectable widget world

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use courier_core::{EventMask, ManualClock, Rect};
use courier_composer::{CombinedScroller, ScrollerConfig, ScrollerHosts};
use courier_platform::{
    EmbeddedContentHost, ScrollHost, ScrollIndicator, ToolbarHost, ViewportGeometry,
};

pub const TOP: i32 = 100;
pub const WIDTH: i32 = 480;
pub const VIEWPORT_HEIGHT: i32 = 600;
pub const HEADER_FIELDS: i32 = 360;
pub const TOOLBAR: i32 = 40;
pub const BODY_HEIGHT: i32 = 800;
pub const BODY_SCROLL: i32 = 1200;

/// With the geometry above
pub const HEADER: i32 = HEADER_FIELDS + TOOLBAR;
pub const EDGE: i32 = HEADER - TOOLBAR;
pub const MAX: i32 = HEADER + BODY_HEIGHT - VIEWPORT_HEIGHT + BODY_SCROLL;
pub const SPLIT: i32 = (BODY_HEIGHT - VIEWPORT_HEIGHT - TOOLBAR) / 2 + HEADER;

#[derive(Debug, Default)]
pub struct World {
    pub viewport: ViewportGeometry,
    pub content_height: i32,
    pub region_y: i32,
    pub show_region_calls: Vec<(i32, i32, i32, i32)>,
    /// Events the next layout pass raises
    pub layout_events: EventMask,
    pub layout_calls: usize,

    pub body_height: i32,
    pub body_scroll_pos: i32,
    pub body_scroll_size: i32,
    pub body_focus: bool,
    pub caret_notifications: usize,
    pub visible_rects: Vec<Rect>,
    pub scroll_begins: usize,
    pub scroll_ends: usize,

    pub toolbar_height: i32,
    pub pinned: Option<i32>,
    pub pin_calls: usize,
    pub unpin_calls: usize,

    pub drag_size: f64,
    pub drag_value: f64,
    pub scroll_signals: usize,
}

impl World {
    pub fn composer() -> Self {
        Self {
            viewport: ViewportGeometry::new(TOP, WIDTH, VIEWPORT_HEIGHT),
            content_height: HEADER + BODY_HEIGHT,
            body_height: BODY_HEIGHT,
            body_scroll_size: BODY_SCROLL,
            toolbar_height: TOOLBAR,
            ..Default::default()
        }
    }
}

pub type SharedWorld = Rc<RefCell<World>>;

struct FakeScroller(SharedWorld);

impl ScrollHost for FakeScroller {
    fn viewport(&self) -> ViewportGeometry {
        self.0.borrow().viewport
    }

    fn content_height(&self) -> i32 {
        self.0.borrow().content_height
    }

    fn region_y(&self) -> i32 {
        self.0.borrow().region_y
    }

    fn show_region(&mut self, x: i32, y: i32, width: i32, height: i32) {
        let mut world = self.0.borrow_mut();
        world.region_y = y;
        world.show_region_calls.push((x, y, width, height));
    }

    fn calculate_layout(&mut self) -> EventMask {
        let mut world = self.0.borrow_mut();
        world.layout_calls += 1;
        std::mem::take(&mut world.layout_events)
    }
}

struct FakeBody(SharedWorld);

impl EmbeddedContentHost for FakeBody {
    fn height(&self) -> i32 {
        self.0.borrow().body_height
    }

    fn scroll_pos(&self) -> i32 {
        self.0.borrow().body_scroll_pos
    }

    fn scroll_size(&self) -> i32 {
        self.0.borrow().body_scroll_size
    }

    fn set_scroll(&mut self, _x: i32, y: i32) {
        self.0.borrow_mut().body_scroll_pos = y;
    }

    fn has_focus(&self) -> bool {
        self.0.borrow().body_focus
    }

    fn notify_caret_position(&mut self) {
        self.0.borrow_mut().caret_notifications += 1;
    }

    fn visible_content_changed(&mut self, rect: Rect) {
        self.0.borrow_mut().visible_rects.push(rect);
    }

    fn custom_scroll_begin(&mut self) {
        self.0.borrow_mut().scroll_begins += 1;
    }

    fn custom_scroll_end(&mut self) {
        self.0.borrow_mut().scroll_ends += 1;
    }
}

struct FakeToolbar(SharedWorld);

impl ToolbarHost for FakeToolbar {
    fn height(&self) -> i32 {
        self.0.borrow().toolbar_height
    }

    fn pin(&mut self, placeholder_height: i32) {
        let mut world = self.0.borrow_mut();
        world.pinned = Some(placeholder_height);
        world.pin_calls += 1;
    }

    fn unpin(&mut self) {
        let mut world = self.0.borrow_mut();
        world.pinned = None;
        world.unpin_calls += 1;
    }
}

struct FakeIndicator(SharedWorld);

impl ScrollIndicator for FakeIndicator {
    fn set_drag_size(&mut self, size: f64) {
        self.0.borrow_mut().drag_size = size;
    }

    fn set_drag_value(&mut self, value: f64) {
        self.0.borrow_mut().drag_value = value;
    }

    fn emit_scroll(&mut self) {
        self.0.borrow_mut().scroll_signals += 1;
    }
}

/// Log to the test output, filtered by `RUST_LOG`
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub struct Harness {
    pub scroller: CombinedScroller,
    pub world: SharedWorld,
    pub clock: ManualClock,
}

impl Harness {
    /// A scroller over `world` that has not been started
    pub fn new(world: World) -> Self {
        init_tracing();

        let world = Rc::new(RefCell::new(world));
        let clock = ManualClock::new();
        clock.set(10.0);

        let hosts = ScrollerHosts {
            scroller: Box::new(FakeScroller(world.clone())),
            body: Box::new(FakeBody(world.clone())),
            toolbar: Some(Box::new(FakeToolbar(world.clone()))),
            indicator: Box::new(FakeIndicator(world.clone())),
        };
        let scroller = CombinedScroller::with_clock(hosts, ScrollerConfig::default(), clock.clone());

        Self {
            scroller,
            world,
            clock,
        }
    }

    /// A started scroller past its initialization delay
    pub fn ready() -> Self {
        Self::ready_with(World::composer())
    }

    pub fn ready_with(world: World) -> Self {
        let mut harness = Self::new(world);
        harness.scroller.start();
        harness.clock.advance(harness.scroller.config().initialize_delay);
        harness.scroller.fire_timers();
        assert!(harness.scroller.is_ready());
        harness
    }

    /// Tick the animator at 60 fps until it finishes; returns frames played
    pub fn run_animation(&mut self) -> usize {
        for frame in 1..=600 {
            self.clock.advance(1.0 / 60.0);
            if self.scroller.animate().is_done() {
                return frame;
            }
        }
        panic!("animation did not finish");
    }

    pub fn world(&self) -> std::cell::Ref<'_, World> {
        self.world.borrow()
    }

    pub fn world_mut(&self) -> std::cell::RefMut<'_, World> {
        self.world.borrow_mut()
    }
}
