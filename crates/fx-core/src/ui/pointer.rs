use crate::constants::MAGNET_FACTOR;
use crate::scheduler::{FrameHandle, TimerHandle};

/// CSS custom property values derived from a pointer over a button.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerGlow {
    /// Pointer position as a percentage of the button box.
    pub mx: f64,
    pub my: f64,
    /// Magnet offset in px, pulling the button toward the pointer.
    pub tx: f64,
    pub ty: f64,
}

impl PointerGlow {
    /// `x`, `y` are relative to the button's top-left corner.
    pub fn compute(x: f64, y: f64, width: f64, height: f64) -> Self {
        let pct = |v: f64, extent: f64| if extent > 0.0 { v / extent * 100.0 } else { 50.0 };
        Self {
            mx: pct(x, width),
            my: pct(y, height),
            tx: (x - width / 2.0) * MAGNET_FACTOR,
            ty: (y - height / 2.0) * MAGNET_FACTOR,
        }
    }
}

/// Lets at most one update wait for the next animation frame, and keeps its
/// request so it can be cancelled.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameThrottle {
    pending: Option<FrameHandle>,
}

impl FrameThrottle {
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Record the frame that will run the update.
    pub fn arm(&mut self, handle: FrameHandle) {
        self.pending = Some(handle);
    }

    /// The update ran.
    pub fn finish(&mut self) {
        self.pending = None;
    }

    /// Hand over the outstanding request for cancellation.
    pub fn take(&mut self) -> Option<FrameHandle> {
        self.pending.take()
    }
}

/// Ripple-removal timers still waiting to fire.
#[derive(Clone, Debug, Default)]
pub struct RippleTimers {
    live: Vec<TimerHandle>,
}

impl RippleTimers {
    pub fn track(&mut self, handle: TimerHandle) {
        self.live.push(handle);
    }

    pub fn fired(&mut self, handle: TimerHandle) {
        self.live.retain(|h| *h != handle);
    }

    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    pub fn drain(&mut self) -> Vec<TimerHandle> {
        std::mem::take(&mut self.live)
    }
}

#[inline]
pub fn px(v: f64) -> String {
    format!("{}px", v)
}

#[inline]
pub fn percent(v: f64) -> String {
    format!("{}%", v)
}
