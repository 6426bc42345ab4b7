use fx_core::constants::THEME_KEY;
use fx_core::prefs::persist;
use fx_core::ui::theme::{aria_bool, Theme};
use fx_core::FlagStore;
use web_sys as web;

use crate::constants::{DARK_CLASS, PREFERS_DARK_QUERY, THEME_TOGGLE_ID};
use crate::dom::{self, Listeners};
use crate::storage;

/// Apply the stored (or OS) theme and wire the toggle button when present.
pub fn wire(window: &web::Window, document: &web::Document, listeners: &mut Listeners) {
    let Some(root) = document.document_element() else {
        return;
    };
    let mut store = storage::open_store(window);
    let theme = Theme::resolve(
        store.get(THEME_KEY).as_deref(),
        dom::media_matches(window, PREFERS_DARK_QUERY),
    );
    dom::set_class(&root, DARK_CLASS, theme.is_dark());

    let Some(button) = document.get_element_by_id(THEME_TOGGLE_ID) else {
        return;
    };
    _ = button.set_attribute("aria-pressed", aria_bool(theme.is_dark()));

    let b = button.clone();
    listeners.listen(&button, "click", move |_| {
        let theme = Theme::from_dark(root.class_list().contains(DARK_CLASS)).toggled();
        dom::set_class(&root, DARK_CLASS, theme.is_dark());
        persist(store.as_mut(), THEME_KEY, theme.as_str());
        _ = b.set_attribute("aria-pressed", aria_bool(theme.is_dark()));
    });
}
