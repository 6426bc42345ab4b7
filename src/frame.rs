use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use fx_core::{FrameHandle, FrameScheduler, Timer, TimerHandle};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Slot holding a reusable JS callback. Emptying the slot releases the
/// closure and whatever state it captured.
pub type CallbackSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

pub fn callback_slot() -> CallbackSlot {
    Rc::new(RefCell::new(None))
}

pub fn fill_slot(slot: &CallbackSlot, f: impl FnMut() + 'static) {
    *slot.borrow_mut() = Some(Closure::wrap(Box::new(f) as Box<dyn FnMut()>));
}

/// `requestAnimationFrame` driving the callback in its slot.
pub struct RafScheduler {
    callback: CallbackSlot,
}

impl RafScheduler {
    pub fn new(callback: CallbackSlot) -> Self {
        Self { callback }
    }
}

impl FrameScheduler for RafScheduler {
    fn request_frame(&mut self) -> Option<FrameHandle> {
        let window = web::window()?;
        let slot = self.callback.borrow();
        let cb = slot.as_ref()?;
        let id = window.request_animation_frame(cb.as_ref().unchecked_ref()).ok()?;
        Some(FrameHandle(id))
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if let Some(w) = web::window() {
            _ = w.cancel_animation_frame(handle.0);
        }
    }
}

/// `setTimeout` firing the callback in its slot.
pub struct WindowTimer {
    callback: CallbackSlot,
}

impl WindowTimer {
    pub fn new(callback: CallbackSlot) -> Self {
        Self { callback }
    }
}

impl Timer for WindowTimer {
    fn set_timeout(&mut self, delay: Duration) -> Option<TimerHandle> {
        let window = web::window()?;
        let slot = self.callback.borrow();
        let cb = slot.as_ref()?;
        let id = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                cb.as_ref().unchecked_ref(),
                delay.as_millis() as i32,
            )
            .ok()?;
        Some(TimerHandle(id))
    }

    fn clear_timeout(&mut self, handle: TimerHandle) {
        if let Some(w) = web::window() {
            w.clear_timeout_with_handle(handle.0);
        }
    }
}
