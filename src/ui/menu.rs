use std::cell::Cell;
use std::rc::Rc;

use fx_core::ui::menu::{ClickTarget, MenuState};
use fx_core::ui::theme::aria_bool;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::{NAV_TOGGLE_ID, NAV_TOGGLE_SELECTOR, OPEN_CLASS, SITE_NAV_ID, SITE_NAV_SELECTOR};
use crate::dom::{self, Listeners};

#[derive(Clone)]
struct Drawer {
    button: web::Element,
    list: web::Element,
    state: Rc<Cell<MenuState>>,
}

impl Drawer {
    /// Run `f` against the state and re-render when it reports a change.
    fn update(&self, f: impl FnOnce(&mut MenuState) -> bool) {
        let mut state = self.state.get();
        if f(&mut state) {
            self.state.set(state);
            dom::set_class(&self.list, OPEN_CLASS, state.is_open());
            _ = self
                .button
                .set_attribute("aria-expanded", aria_bool(state.is_open()));
        }
    }
}

pub fn wire(document: &web::Document, listeners: &mut Listeners) {
    let (Some(button), Some(list)) = (
        document.get_element_by_id(NAV_TOGGLE_ID),
        document.get_element_by_id(SITE_NAV_ID),
    ) else {
        return;
    };
    let drawer = Drawer {
        button: button.clone(),
        list: list.clone(),
        state: Rc::new(Cell::new(MenuState::default())),
    };

    {
        let d = drawer.clone();
        listeners.listen(&button, "click", move |_| {
            d.update(|s| {
                s.toggle();
                true
            })
        });
    }
    {
        // A link inside the drawer closes it.
        let d = drawer.clone();
        listeners.listen(&list, "click", move |ev| {
            if dom::event_closest(&ev, "a").is_some() {
                d.update(|s| s.on_click(ClickTarget::MenuLink));
            }
        });
    }
    {
        let d = drawer.clone();
        listeners.listen(document, "keydown", move |ev| {
            if let Some(kev) = ev.dyn_ref::<web::KeyboardEvent>() {
                let key = kev.key();
                d.update(|s| s.on_key(&key));
            }
        });
    }
    {
        let d = drawer;
        listeners.listen(document, "click", move |ev| {
            let inside = dom::event_closest(&ev, SITE_NAV_SELECTOR).is_some()
                || dom::event_closest(&ev, NAV_TOGGLE_SELECTOR).is_some();
            let target = if inside {
                ClickTarget::MenuOrToggle
            } else {
                ClickTarget::Outside
            };
            d.update(|s| s.on_click(target));
        });
    }
}
