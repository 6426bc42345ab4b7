use std::cell::{Cell, RefCell};
use std::rc::Rc;

use fx_core::constants::RIPPLE_DURATION_MS;
use fx_core::ui::pointer::{percent, px, FrameThrottle, PointerGlow, RippleTimers};
use fx_core::{FrameHandle, TimerHandle};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::{BUTTON_SELECTOR, MAGNET_CLASS, RIPPLE_CLASS};
use crate::dom::{self, Listeners};

/// Callbacks the button effects have scheduled. Dropping it cancels the
/// pending pointer frame and every ripple timer.
#[derive(Default)]
pub struct ButtonEffects {
    throttle: Rc<RefCell<FrameThrottle>>,
    ripples: Rc<RefCell<RippleTimers>>,
}

impl Drop for ButtonEffects {
    fn drop(&mut self) {
        let Some(w) = web::window() else {
            return;
        };
        if let Some(handle) = self.throttle.borrow_mut().take() {
            _ = w.cancel_animation_frame(handle.0);
        }
        for handle in self.ripples.borrow_mut().drain() {
            w.clear_timeout_with_handle(handle.0);
        }
    }
}

/// Ripple on click, pointer-following glow, and the magnet pull on `.mag` buttons.
pub fn wire(document: &web::Document, listeners: &mut Listeners) -> ButtonEffects {
    // One pending frame shared by every button.
    let effects = ButtonEffects::default();

    for el in dom::query_all(document, BUTTON_SELECTOR) {
        let Ok(btn) = el.dyn_into::<web::HtmlElement>() else {
            continue;
        };

        {
            let b = btn.clone();
            let ripples = effects.ripples.clone();
            listeners.listen(&btn, "click", move |ev| {
                if let Some(mev) = ev.dyn_ref::<web::MouseEvent>() {
                    ripple(&b, mev.client_x() as f64, mev.client_y() as f64, &ripples);
                }
            });
        }
        {
            let b = btn.clone();
            let throttle = effects.throttle.clone();
            listeners.listen(&btn, "pointermove", move |ev| {
                let Some(mev) = ev.dyn_ref::<web::MouseEvent>() else {
                    return;
                };
                if throttle.borrow().is_pending() {
                    return;
                }
                let (cx, cy) = (mev.client_x() as f64, mev.client_y() as f64);
                let (b2, th) = (b.clone(), throttle.clone());
                let update = Closure::once_into_js(move || {
                    th.borrow_mut().finish();
                    follow_pointer(&b2, cx, cy);
                });
                let requested = web::window()
                    .and_then(|w| w.request_animation_frame(update.unchecked_ref()).ok());
                if let Some(id) = requested {
                    throttle.borrow_mut().arm(FrameHandle(id));
                }
            });
        }
        {
            let b = btn.clone();
            listeners.listen(&btn, "pointerleave", move |_| {
                if b.class_list().contains(MAGNET_CLASS) {
                    let style = b.style();
                    _ = style.set_property("--tx", "0px");
                    _ = style.set_property("--ty", "0px");
                }
            });
        }
    }
    effects
}

fn ripple(
    btn: &web::HtmlElement,
    client_x: f64,
    client_y: f64,
    ripples: &Rc<RefCell<RippleTimers>>,
) {
    let rect = btn.get_bounding_client_rect();
    let style = btn.style();
    _ = style.set_property("--rx", &px(client_x - rect.left()));
    _ = style.set_property("--ry", &px(client_y - rect.top()));

    // Restart the CSS animation: drop the class, force a reflow, add it back.
    let classes = btn.class_list();
    _ = classes.remove_1(RIPPLE_CLASS);
    _ = btn.offset_width();
    _ = classes.add_1(RIPPLE_CLASS);

    let Some(w) = web::window() else {
        return;
    };
    let id = Rc::new(Cell::new(None));
    let done = {
        let (b, r, id) = (btn.clone(), ripples.clone(), id.clone());
        Closure::once_into_js(move || {
            if let Some(handle) = id.get() {
                r.borrow_mut().fired(handle);
            }
            _ = b.class_list().remove_1(RIPPLE_CLASS);
        })
    };
    if let Ok(handle) = w.set_timeout_with_callback_and_timeout_and_arguments_0(
        done.unchecked_ref(),
        RIPPLE_DURATION_MS as i32,
    ) {
        id.set(Some(TimerHandle(handle)));
        ripples.borrow_mut().track(TimerHandle(handle));
    }
}

fn follow_pointer(btn: &web::HtmlElement, client_x: f64, client_y: f64) {
    let rect = btn.get_bounding_client_rect();
    let glow = PointerGlow::compute(
        client_x - rect.left(),
        client_y - rect.top(),
        rect.width(),
        rect.height(),
    );
    let style = btn.style();
    _ = style.set_property("--mx", &percent(glow.mx));
    _ = style.set_property("--my", &percent(glow.my));
    if btn.class_list().contains(MAGNET_CLASS) {
        _ = style.set_property("--tx", &px(glow.tx));
        _ = style.set_property("--ty", &px(glow.ty));
    }
}
