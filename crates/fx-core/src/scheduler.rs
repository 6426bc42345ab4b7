//! Host scheduling capabilities.
//!
//! The browser provides "next paint" callbacks and one-shot timers; both are
//! injected so the simulator and its controller run unchanged in host tests.

use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub i32);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerHandle(pub i32);

/// Schedules the frame callback for the next paint.
pub trait FrameScheduler {
    /// Returns `None` when the host refused to schedule.
    fn request_frame(&mut self) -> Option<FrameHandle>;
    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// One-shot timer firing the controller's deferred callback.
pub trait Timer {
    fn set_timeout(&mut self, delay: Duration) -> Option<TimerHandle>;
    fn clear_timeout(&mut self, handle: TimerHandle);
}
