#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;

use fx_core::PageLifecycle;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod backdrop;
mod constants;
mod dom;
mod frame;
mod storage;
mod surface;
mod ui;

/// Everything registered on the page. Dropping it stops the backdrop,
/// removes every listener and disconnects the observers.
struct App {
    backdrop: Option<backdrop::BackdropWiring>,
    buttons: ui::buttons::ButtonEffects,
    listeners: dom::Listeners,
    observers: Vec<dom::Observer>,
}

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
    static LIFECYCLE: RefCell<PageLifecycle> = RefCell::new(PageLifecycle::default());
    // `pagehide`/`pageshow` handlers; registered once and kept for the page's life.
    static PAGE_EVENTS: RefCell<Option<dom::Listeners>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("landing-fx starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    watch_page_lifecycle();
    Ok(())
}

/// Release the wiring on `pagehide` and wire again when the page is
/// restored from the back/forward cache.
fn watch_page_lifecycle() {
    let Some(window) = web::window() else {
        return;
    };
    let mut events = dom::Listeners::default();
    events.listen(&window, "pagehide", |_| {
        if LIFECYCLE.with(|l| l.borrow_mut().on_hide()) {
            teardown();
        }
    });
    events.listen(&window, "pageshow", |ev| {
        let persisted = ev
            .dyn_ref::<web::PageTransitionEvent>()
            .map(|e| e.persisted())
            .unwrap_or(false);
        if LIFECYCLE.with(|l| l.borrow_mut().on_show(persisted)) {
            log::info!("[init] restored from page cache, wiring again");
            if let Err(e) = init() {
                log::error!("init error: {:?}", e);
            }
        }
    });
    PAGE_EVENTS.with(|p| *p.borrow_mut() = Some(events));
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let mut listeners = dom::Listeners::default();
    let mut observers = Vec::new();

    ui::theme::wire(&window, &document, &mut listeners);
    ui::menu::wire(&document, &mut listeners);
    ui::scroll::wire(&document, &mut listeners);
    ui::reveal::wire(&window, &document, &mut observers);
    let buttons = ui::buttons::wire(&document, &mut listeners);
    let backdrop = backdrop::wire(&window, &document, &mut listeners);
    ui::nav::wire(&document, &mut listeners, &mut observers);

    log::info!(
        "[init] listeners={} observers={} backdrop={}",
        listeners.len(),
        observers.len(),
        backdrop.is_some()
    );

    // A second start replaces (and tears down) the previous registration.
    teardown();
    APP.with(|app| {
        *app.borrow_mut() = Some(App {
            backdrop,
            buttons,
            listeners,
            observers,
        })
    });
    LIFECYCLE.with(|l| l.borrow_mut().wired());
    Ok(())
}

/// Stop the backdrop and release every listener, observer and scheduled callback.
#[wasm_bindgen]
pub fn teardown() {
    let app = APP.with(|app| app.borrow_mut().take());
    LIFECYCLE.with(|l| l.borrow_mut().released());
    if let Some(App {
        backdrop,
        buttons,
        listeners,
        observers,
    }) = app
    {
        // Stop the frame loop and pending button callbacks before their listeners go away.
        drop(backdrop);
        drop(buttons);
        drop(listeners);
        drop(observers);
        log::info!("landing-fx torn down");
    }
}
