use fx_core::ui::anchor::anchor_selector;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::ANCHOR_SELECTOR;
use crate::dom::{self, Listeners};

/// Smooth-scroll in-page anchors and move focus to their targets.
pub fn wire(document: &web::Document, listeners: &mut Listeners) {
    for anchor in dom::query_all(document, ANCHOR_SELECTOR) {
        let doc = document.clone();
        let a = anchor.clone();
        listeners.listen(&anchor, "click", move |ev| {
            let Some(href) = a.get_attribute("href") else {
                return;
            };
            let Some(selector) = anchor_selector(&href) else {
                return;
            };
            let Ok(Some(target)) = doc.query_selector(selector) else {
                return;
            };
            ev.prevent_default();
            scroll_and_focus(&target);
        });
    }
}

fn scroll_and_focus(target: &web::Element) {
    let opts = web::ScrollIntoViewOptions::new();
    opts.set_behavior(web::ScrollBehavior::Smooth);
    opts.set_block(web::ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&opts);

    // Temporarily focusable so screen readers follow the jump.
    _ = target.set_attribute("tabindex", "-1");
    if let Some(el) = target.dyn_ref::<web::HtmlElement>() {
        let focus = web::FocusOptions::new();
        focus.set_prevent_scroll(true);
        _ = el.focus_with_options(&focus);
    }

    let t = target.clone();
    let cleanup = Closure::once_into_js(move || {
        _ = t.remove_attribute("tabindex");
    });
    let once = web::AddEventListenerOptions::new();
    once.set_once(true);
    _ = target.add_event_listener_with_callback_and_add_event_listener_options(
        "blur",
        cleanup.unchecked_ref(),
        &once,
    );
}
