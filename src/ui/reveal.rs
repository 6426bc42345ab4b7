use fx_core::constants::REVEAL_THRESHOLD;
use wasm_bindgen::JsValue;
use web_sys as web;

use crate::constants::{REVEAL_SELECTOR, VISIBLE_CLASS};
use crate::dom::{self, Observer};

/// Mark `.reveal` elements visible the first time they scroll into view.
pub fn wire(window: &web::Window, document: &web::Document, observers: &mut Vec<Observer>) {
    let targets = dom::query_all(document, REVEAL_SELECTOR);
    if targets.is_empty() {
        return;
    }

    let supported = js_sys::Reflect::has(window, &JsValue::from_str("IntersectionObserver"))
        .unwrap_or(false);
    let observer = if supported {
        Observer::new(REVEAL_THRESHOLD, None, |entry, observer| {
            if entry.is_intersecting() {
                let el = entry.target();
                dom::set_class(&el, VISIBLE_CLASS, true);
                observer.unobserve(&el);
            }
        })
    } else {
        None
    };

    match observer {
        Some(observer) => {
            for el in &targets {
                observer.observe(el);
            }
            observers.push(observer);
        }
        // No observer support: show everything up front.
        None => {
            for el in &targets {
                dom::set_class(el, VISIBLE_CLASS, true);
            }
        }
    }
}
