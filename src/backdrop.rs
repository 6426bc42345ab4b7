use std::cell::RefCell;
use std::rc::Rc;

use fx_core::motion::toggle_label;
use fx_core::ui::theme::aria_bool;
use fx_core::{Backdrop, FieldConfig, Simulator};
use rand::rngs::StdRng;
use rand::SeedableRng;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::{BG_CANVAS_ID, BG_TOGGLE_ID, BUTTON_LABEL_SELECTOR, REDUCED_MOTION_QUERY};
use crate::dom::{self, Listeners};
use crate::frame::{callback_slot, fill_slot, CallbackSlot, RafScheduler, WindowTimer};
use crate::storage;
use crate::surface::CanvasSurface;

type PageBackdrop = Backdrop<CanvasSurface, RafScheduler, WindowTimer>;

/// The running backdrop and the JS callbacks feeding it. Dropping it stops
/// the animation and releases the frame and timer closures.
pub struct BackdropWiring {
    backdrop: Rc<RefCell<PageBackdrop>>,
    frame_cb: CallbackSlot,
    resize_cb: CallbackSlot,
}

impl Drop for BackdropWiring {
    fn drop(&mut self) {
        if let Ok(mut b) = self.backdrop.try_borrow_mut() {
            b.shutdown();
        }
        // The closures hold the backdrop; emptying the slots breaks the cycle.
        self.frame_cb.borrow_mut().take();
        self.resize_cb.borrow_mut().take();
    }
}

fn sync_toggle(toggle: &web::Element, animating: bool) {
    if let Ok(Some(label)) = toggle.query_selector(BUTTON_LABEL_SELECTOR) {
        label.set_text_content(Some(toggle_label(animating)));
    }
    _ = toggle.set_attribute("aria-pressed", aria_bool(animating));
}

/// Wire the particle backdrop if the page has both the canvas and its toggle.
pub fn wire(
    window: &web::Window,
    document: &web::Document,
    listeners: &mut Listeners,
) -> Option<BackdropWiring> {
    let canvas = document
        .get_element_by_id(BG_CANVAS_ID)?
        .dyn_into::<web::HtmlCanvasElement>()
        .ok()?;
    let toggle = document.get_element_by_id(BG_TOGGLE_ID)?;
    let surface = CanvasSurface::new(canvas)?;

    let frame_cb = callback_slot();
    let resize_cb = callback_slot();
    let reduced_motion = dom::media_query(window, REDUCED_MOTION_QUERY);

    let sim = Simulator::new(
        surface,
        RafScheduler::new(frame_cb.clone()),
        FieldConfig::default(),
        StdRng::from_entropy(),
    );
    let backdrop = Rc::new(RefCell::new(Backdrop::new(
        sim,
        WindowTimer::new(resize_cb.clone()),
        storage::open_store(window),
        reduced_motion.as_ref().map(|m| m.matches()).unwrap_or(false),
        document.hidden(),
    )));

    {
        let b = backdrop.clone();
        fill_slot(&frame_cb, move || b.borrow_mut().on_frame());
    }
    {
        let b = backdrop.clone();
        fill_slot(&resize_cb, move || b.borrow_mut().on_resize_timeout());
    }

    let animating = backdrop.borrow_mut().apply();
    sync_toggle(&toggle, animating);

    {
        let b = backdrop.clone();
        let t = toggle.clone();
        listeners.listen(&toggle, "click", move |_| {
            let animating = b.borrow_mut().toggle();
            sync_toggle(&t, animating);
        });
    }
    {
        let b = backdrop.clone();
        listeners.listen(window, "resize", move |_| b.borrow_mut().on_resize());
    }
    if let Some(mql) = reduced_motion {
        let b = backdrop.clone();
        let t = toggle.clone();
        let m = mql.clone();
        listeners.listen(&mql, "change", move |_| {
            let animating = b.borrow_mut().set_reduced_motion(m.matches());
            sync_toggle(&t, animating);
        });
    }
    {
        let b = backdrop.clone();
        let t = toggle.clone();
        let d = document.clone();
        listeners.listen(document, "visibilitychange", move |_| {
            let animating = b.borrow_mut().set_tab_hidden(d.hidden());
            sync_toggle(&t, animating);
        });
    }

    Some(BackdropWiring {
        backdrop,
        frame_cb,
        resize_cb,
    })
}
