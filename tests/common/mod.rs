// Host fakes for the browser capabilities the backdrop runs on.
// Each fake shares its log through `Rc<RefCell<_>>` so tests can inspect and
// drive it while the backdrop owns the fake itself.

#![allow(dead_code)]
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use fx_core::{
    Backdrop, FieldConfig, FlagStore, FrameHandle, FrameScheduler, Glow, MemoryStore, Simulator,
    StoreError, Surface, SurfaceDimensions, Timer, TimerHandle,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

// ---------------- Surface ----------------
#[derive(Debug, Default)]
pub struct SurfaceLog {
    pub viewport: (f64, f64),
    pub dpr: f64,
    pub resizes: usize,
    pub clears: usize,
    /// Glows painted since the last clear, i.e. what is on screen.
    pub visible: Vec<Glow>,
}

pub struct FakeSurface(pub Rc<RefCell<SurfaceLog>>);

impl Surface for FakeSurface {
    fn resize(&mut self) -> SurfaceDimensions {
        let mut log = self.0.borrow_mut();
        log.resizes += 1;
        let (w, h) = log.viewport;
        SurfaceDimensions::measure(w, h, w, h, log.dpr)
    }

    fn clear(&mut self) {
        let mut log = self.0.borrow_mut();
        log.clears += 1;
        log.visible.clear();
    }

    fn draw_glow(&mut self, glow: &Glow) {
        self.0.borrow_mut().visible.push(glow.clone());
    }
}

// ---------------- Frames ----------------
#[derive(Debug, Default)]
pub struct FrameLog {
    pub next: i32,
    pub pending: Vec<i32>,
    pub requested: usize,
    pub cancelled: usize,
}

pub struct FakeFrames(pub Rc<RefCell<FrameLog>>);

impl FrameScheduler for FakeFrames {
    fn request_frame(&mut self) -> Option<FrameHandle> {
        let mut log = self.0.borrow_mut();
        log.next += 1;
        log.requested += 1;
        let id = log.next;
        log.pending.push(id);
        Some(FrameHandle(id))
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        let mut log = self.0.borrow_mut();
        log.pending.retain(|id| *id != handle.0);
        log.cancelled += 1;
    }
}

// ---------------- Timers (virtual clock) ----------------
#[derive(Debug, Default)]
pub struct TimerLog {
    pub now_ms: u64,
    pub next: i32,
    /// (handle, due time)
    pub live: Vec<(i32, u64)>,
    pub set: usize,
    pub cleared: usize,
}

pub struct FakeTimer(pub Rc<RefCell<TimerLog>>);

impl Timer for FakeTimer {
    fn set_timeout(&mut self, delay: Duration) -> Option<TimerHandle> {
        let mut log = self.0.borrow_mut();
        log.next += 1;
        log.set += 1;
        let id = log.next;
        let due = log.now_ms + delay.as_millis() as u64;
        log.live.push((id, due));
        Some(TimerHandle(id))
    }

    fn clear_timeout(&mut self, handle: TimerHandle) {
        let mut log = self.0.borrow_mut();
        log.live.retain(|(id, _)| *id != handle.0);
        log.cleared += 1;
    }
}

// ---------------- Store ----------------
#[derive(Clone, Default)]
pub struct SharedStore(pub Rc<RefCell<MemoryStore>>);

impl FlagStore for SharedStore {
    fn get(&self, key: &str) -> Option<String> {
        self.0.borrow().get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.0.borrow_mut().set(key, value)
    }
}

/// Storage that exists but refuses every write.
pub struct ReadOnlyStore;

impl FlagStore for ReadOnlyStore {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Unavailable)
    }
}

// ---------------- Page harness ----------------
pub type TestBackdrop = Backdrop<FakeSurface, FakeFrames, FakeTimer>;

pub struct Page {
    pub backdrop: TestBackdrop,
    pub surface: Rc<RefCell<SurfaceLog>>,
    pub frames: Rc<RefCell<FrameLog>>,
    pub timers: Rc<RefCell<TimerLog>>,
    pub store: SharedStore,
}

pub fn simulator(
    width: f64,
    height: f64,
    seed: u64,
) -> (
    Simulator<FakeSurface, FakeFrames>,
    Rc<RefCell<SurfaceLog>>,
    Rc<RefCell<FrameLog>>,
) {
    let surface = Rc::new(RefCell::new(SurfaceLog {
        viewport: (width, height),
        dpr: 1.0,
        ..Default::default()
    }));
    let frames = Rc::new(RefCell::new(FrameLog::default()));
    let sim = Simulator::new(
        FakeSurface(surface.clone()),
        FakeFrames(frames.clone()),
        FieldConfig::default(),
        StdRng::seed_from_u64(seed),
    );
    (sim, surface, frames)
}

impl Page {
    pub fn new(width: f64, height: f64) -> Self {
        Self::with(width, height, None, false, false)
    }

    pub fn with(
        width: f64,
        height: f64,
        stored: Option<&str>,
        reduced_motion: bool,
        tab_hidden: bool,
    ) -> Self {
        let store = SharedStore::default();
        if let Some(v) = stored {
            store.0.borrow_mut().set("bg-anim", v).unwrap();
        }
        let (sim, surface, frames) = simulator(width, height, 42);
        let timers = Rc::new(RefCell::new(TimerLog::default()));
        let backdrop = Backdrop::new(
            sim,
            FakeTimer(timers.clone()),
            Box::new(store.clone()),
            reduced_motion,
            tab_hidden,
        );
        Self {
            backdrop,
            surface,
            frames,
            timers,
            store,
        }
    }

    /// Host paints: fire the pending frame callback, if any.
    pub fn pump_frame(&mut self) -> bool {
        let fired = self.frames.borrow_mut().pending.pop();
        if fired.is_some() {
            self.backdrop.on_frame();
        }
        fired.is_some()
    }

    /// Move the virtual clock forward, firing timers that come due.
    pub fn advance(&mut self, ms: u64) {
        let now = {
            let mut t = self.timers.borrow_mut();
            t.now_ms += ms;
            t.now_ms
        };
        loop {
            let due = {
                let mut t = self.timers.borrow_mut();
                let idx = t.live.iter().position(|(_, at)| *at <= now);
                idx.map(|i| t.live.remove(i))
            };
            match due {
                Some(_) => self.backdrop.on_resize_timeout(),
                None => break,
            }
        }
    }

    pub fn set_viewport(&self, width: f64, height: f64) {
        self.surface.borrow_mut().viewport = (width, height);
    }

    pub fn stored(&self) -> Option<String> {
        self.store.get("bg-anim")
    }

    pub fn frame_pending(&self) -> bool {
        !self.frames.borrow().pending.is_empty()
    }

    pub fn visible_glows(&self) -> usize {
        self.surface.borrow().visible.len()
    }
}
