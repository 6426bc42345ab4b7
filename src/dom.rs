use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[inline]
pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web::Element>().ok())
        .collect()
}

#[inline]
pub fn media_query(window: &web::Window, query: &str) -> Option<web::MediaQueryList> {
    window.match_media(query).ok().flatten()
}

#[inline]
pub fn media_matches(window: &web::Window, query: &str) -> bool {
    media_query(window, query).map(|m| m.matches()).unwrap_or(false)
}

/// Nearest ancestor of the event target (itself included) matching `selector`.
pub fn event_closest(ev: &web::Event, selector: &str) -> Option<web::Element> {
    let el = ev.target()?.dyn_into::<web::Element>().ok()?;
    el.closest(selector).ok().flatten()
}

#[inline]
pub fn set_class(el: &web::Element, class: &str, on: bool) {
    _ = el.class_list().toggle_with_force(class, on);
}

struct Listener {
    target: web::EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl Drop for Listener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref());
    }
}

/// Event listeners registered by the page wiring. Dropping the set removes
/// every listener from its target and frees the closures.
#[derive(Default)]
pub struct Listeners {
    entries: Vec<Listener>,
}

impl Listeners {
    pub fn listen(
        &mut self,
        target: &web::EventTarget,
        kind: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        if target
            .add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
            .is_ok()
        {
            self.entries.push(Listener {
                target: target.clone(),
                kind,
                closure,
            });
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

type EntryCallback = Closure<dyn FnMut(js_sys::Array, web::IntersectionObserver)>;

/// An `IntersectionObserver` with its callback; disconnected on drop.
pub struct Observer {
    observer: web::IntersectionObserver,
    _callback: EntryCallback,
}

impl Observer {
    pub fn new(
        threshold: f64,
        root_margin: Option<&str>,
        mut on_entry: impl FnMut(&web::IntersectionObserverEntry, &web::IntersectionObserver) + 'static,
    ) -> Option<Self> {
        let callback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: web::IntersectionObserver| {
                for entry in entries.iter() {
                    if let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() {
                        on_entry(&entry, &observer);
                    }
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

        let init = web::IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold));
        if let Some(margin) = root_margin {
            init.set_root_margin(margin);
        }
        let observer =
            web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
                .ok()?;
        Some(Self {
            observer,
            _callback: callback,
        })
    }

    pub fn observe(&self, el: &web::Element) {
        self.observer.observe(el);
    }
}

impl Drop for Observer {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
