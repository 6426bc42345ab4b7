//! Controller tying the motion inputs to the particle simulator.
//!
//! Every input change re-evaluates [`MotionState::should_animate`]: when it
//! holds the simulator starts a fresh run, otherwise it stops and the surface
//! is cleared. Window resizes are coalesced through a single pending timer.

use std::time::Duration;

use crate::constants::{ANIMATION_KEY, RESIZE_DEBOUNCE_MS};
use crate::motion::{MotionState, Toggle};
use crate::prefs::{persist, FlagStore};
use crate::scheduler::{FrameScheduler, Timer, TimerHandle};
use crate::simulator::Simulator;
use crate::surface::Surface;

pub struct Backdrop<S, F, T> {
    motion: MotionState,
    sim: Simulator<S, F>,
    timer: T,
    resize_pending: Option<TimerHandle>,
    store: Box<dyn FlagStore>,
    animating: bool,
}

impl<S: Surface, F: FrameScheduler, T: Timer> Backdrop<S, F, T> {
    /// Read the persisted preference (writing the resolved value back) and
    /// capture the live signals. Nothing runs until [`Backdrop::apply`].
    pub fn new(
        sim: Simulator<S, F>,
        timer: T,
        mut store: Box<dyn FlagStore>,
        reduced_motion: bool,
        tab_hidden: bool,
    ) -> Self {
        let user = Toggle::from_stored(store.get(ANIMATION_KEY).as_deref());
        persist(store.as_mut(), ANIMATION_KEY, user.as_str());
        Self {
            motion: MotionState::new(user, reduced_motion, tab_hidden),
            sim,
            timer,
            resize_pending: None,
            store,
            animating: false,
        }
    }

    /// Start a fresh run or stop, according to the current inputs.
    /// Returns whether the backdrop is animating afterwards.
    pub fn apply(&mut self) -> bool {
        let animate = self.motion.should_animate();
        if animate {
            self.sim.start();
        } else {
            self.cancel_resize();
            self.sim.stop();
        }
        if animate != self.animating {
            match self.motion.pause_reason() {
                Some(reason) => log::info!("[backdrop] paused ({})", reason),
                None => log::info!("[backdrop] animating"),
            }
        }
        self.animating = animate;
        animate
    }

    /// The visitor clicked the animation toggle.
    pub fn toggle(&mut self) -> bool {
        self.motion.user = self.motion.user.flip();
        persist(self.store.as_mut(), ANIMATION_KEY, self.motion.user.as_str());
        self.apply()
    }

    pub fn set_reduced_motion(&mut self, reduced: bool) -> bool {
        self.motion.reduced_motion = reduced;
        self.apply()
    }

    pub fn set_tab_hidden(&mut self, hidden: bool) -> bool {
        self.motion.tab_hidden = hidden;
        self.apply()
    }

    /// Window resized: (re)arm the debounce timer. Ignored while paused.
    pub fn on_resize(&mut self) {
        if !self.motion.should_animate() {
            return;
        }
        self.cancel_resize();
        self.resize_pending = self
            .timer
            .set_timeout(Duration::from_millis(RESIZE_DEBOUNCE_MS as u64));
    }

    /// Debounce timer fired.
    pub fn on_resize_timeout(&mut self) {
        self.resize_pending = None;
        if self.motion.should_animate() {
            self.sim.start();
        }
    }

    pub fn on_frame(&mut self) {
        self.sim.frame(self.motion.should_animate());
    }

    /// Release everything scheduled; used on page teardown.
    pub fn shutdown(&mut self) {
        self.cancel_resize();
        self.sim.stop();
        self.animating = false;
    }

    fn cancel_resize(&mut self) {
        if let Some(handle) = self.resize_pending.take() {
            self.timer.clear_timeout(handle);
        }
    }

    pub fn motion(&self) -> MotionState {
        self.motion
    }

    pub fn simulator(&self) -> &Simulator<S, F> {
        &self.sim
    }

    pub fn resize_pending(&self) -> bool {
        self.resize_pending.is_some()
    }
}
