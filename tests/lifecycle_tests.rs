// Page hide/show transitions, including restores from the back/forward cache.

use fx_core::PageLifecycle;

fn wired() -> PageLifecycle {
    let mut page = PageLifecycle::default();
    page.wired();
    page
}

#[test]
fn fresh_load_show_does_not_rewire() {
    let mut page = wired();
    assert!(!page.on_show(false));
    assert!(page.is_wired());
}

#[test]
fn hide_releases_once() {
    let mut page = wired();
    assert!(page.on_hide());
    assert!(!page.is_wired());
    assert!(!page.on_hide(), "nothing left to release");
}

#[test]
fn restore_from_cache_rewires_after_hide() {
    let mut page = wired();
    page.on_hide();
    assert!(page.on_show(true));

    page.wired();
    assert!(page.is_wired());
    assert!(!page.on_show(true), "already wired");
}

#[test]
fn non_persisted_show_after_hide_is_ignored() {
    let mut page = wired();
    page.on_hide();
    assert!(!page.on_show(false));
}

#[test]
fn explicit_teardown_counts_as_released() {
    let mut page = wired();
    page.released();
    assert!(!page.on_hide());
    assert!(page.on_show(true));
}
