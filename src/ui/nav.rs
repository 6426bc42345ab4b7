use std::cell::RefCell;
use std::rc::Rc;

use fx_core::constants::{NAV_ROOT_MARGIN, NAV_THRESHOLD};
use fx_core::ui::anchor::anchor_selector;
use fx_core::ui::nav::NavHighlighter;
use web_sys as web;

use crate::constants::{ACTIVE_CLASS, NAV_LINK_SELECTOR};
use crate::dom::{self, Listeners, Observer};

fn activate(links: &[web::Element], active: usize) {
    for (i, link) in links.iter().enumerate() {
        dom::set_class(link, ACTIVE_CLASS, i == active);
    }
}

/// Highlight the nav link whose section sits in the upper-middle band of the
/// viewport; a focused link takes over.
pub fn wire(document: &web::Document, listeners: &mut Listeners, observers: &mut Vec<Observer>) {
    let links = dom::query_all(document, NAV_LINK_SELECTOR);
    let sections: Vec<(web::Element, usize)> = links
        .iter()
        .enumerate()
        .filter_map(|(i, link)| {
            let href = link.get_attribute("href")?;
            let section = document.query_selector(anchor_selector(&href)?).ok()??;
            Some((section, i))
        })
        .collect();
    if sections.is_empty() {
        return;
    }

    let highlighter = Rc::new(RefCell::new(NavHighlighter::new(
        sections.iter().map(|(section, i)| (section.id(), *i)),
    )));
    let links = Rc::new(links);

    let observer = {
        let h = highlighter.clone();
        let l = links.clone();
        Observer::new(NAV_THRESHOLD, Some(NAV_ROOT_MARGIN), move |entry, _| {
            let id = entry.target().id();
            let hit = h.borrow_mut().on_intersection(&id, entry.is_intersecting());
            if let Some(i) = hit {
                activate(&l, i);
            }
        })
    };
    let Some(observer) = observer else {
        return;
    };
    for (section, _) in &sections {
        observer.observe(section);
    }
    observers.push(observer);

    for (i, link) in links.iter().enumerate() {
        let h = highlighter.clone();
        let l = links.clone();
        listeners.listen(link, "focus", move |_| {
            let active = h.borrow_mut().on_focus(i);
            activate(&l, active);
        });
    }
}
