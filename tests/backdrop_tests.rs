// Backdrop lifecycle scenarios driven through host fakes.

mod common;

use common::{simulator, Page, ReadOnlyStore};
use fx_core::{Backdrop, FlagStore, MemoryStore};

#[test]
fn first_load_persists_default_preference() {
    let page = Page::new(1400.0, 800.0);
    assert_eq!(page.stored().as_deref(), Some("on"));
    assert!(!page.frame_pending(), "nothing runs before apply");
}

#[test]
fn start_sizes_field_from_viewport() {
    let mut page = Page::new(1400.0, 800.0);
    assert!(page.backdrop.apply());
    let sim = page.backdrop.simulator();
    assert_eq!(sim.field().len(), 40);
    assert_eq!(sim.runs(), 1);
    assert!(page.frame_pending());
}

#[test]
fn frame_draws_every_particle_and_reschedules() {
    let mut page = Page::new(1400.0, 800.0);
    page.backdrop.apply();
    assert!(page.pump_frame());
    assert_eq!(page.visible_glows(), 40);
    assert!(page.frame_pending());

    // The next frame clears before painting again.
    assert!(page.pump_frame());
    assert_eq!(page.visible_glows(), 40);
}

#[test]
fn stored_off_keeps_backdrop_idle() {
    let mut page = Page::with(1400.0, 800.0, Some("off"), false, false);
    assert!(!page.backdrop.apply());
    assert!(!page.frame_pending());
    assert_eq!(page.visible_glows(), 0);
    assert_eq!(page.stored().as_deref(), Some("off"));
}

#[test]
fn toggling_off_stops_within_one_frame_and_clears() {
    let mut page = Page::new(1400.0, 800.0);
    page.backdrop.apply();
    page.pump_frame();
    assert_eq!(page.visible_glows(), 40);

    assert!(!page.backdrop.toggle());
    assert!(!page.frame_pending());
    assert_eq!(page.visible_glows(), 0);
    assert_eq!(page.stored().as_deref(), Some("off"));

    // A callback the host had already queued finds the loop paused.
    page.backdrop.on_frame();
    assert_eq!(page.visible_glows(), 0);
    assert!(!page.frame_pending());
}

#[test]
fn toggling_twice_restores_preference_and_running_state() {
    let mut page = Page::new(1400.0, 800.0);
    page.backdrop.apply();
    page.pump_frame();
    let before = page.backdrop.motion();

    page.backdrop.toggle();
    page.backdrop.toggle();

    assert_eq!(page.backdrop.motion(), before);
    assert_eq!(page.stored().as_deref(), Some("on"));
    assert!(page.frame_pending());
    page.pump_frame();
    assert_eq!(page.visible_glows(), 40);
    assert_eq!(page.backdrop.simulator().field().len(), 40);
}

#[test]
fn hidden_tab_pauses_and_return_reseeds() {
    let mut page = Page::new(1400.0, 800.0);
    page.backdrop.apply();
    page.pump_frame();
    let old = page.backdrop.simulator().field().particles.clone();

    assert!(!page.backdrop.set_tab_hidden(true));
    assert!(!page.frame_pending());
    assert_eq!(page.visible_glows(), 0);
    assert!(page.backdrop.simulator().field().is_empty());

    // The window changed size while hidden.
    page.set_viewport(1920.0, 1080.0);
    assert!(page.backdrop.set_tab_hidden(false));
    let sim = page.backdrop.simulator();
    assert_eq!(sim.runs(), 2);
    assert_eq!(sim.field().len(), 74);
    assert_ne!(sim.field().particles[..old.len().min(74)], old[..]);
    assert!(page.frame_pending());
}

#[test]
fn reduced_motion_pauses_and_ignores_resizes() {
    let mut page = Page::new(1400.0, 800.0);
    page.backdrop.apply();
    assert!(!page.backdrop.set_reduced_motion(true));
    assert!(!page.frame_pending());

    page.backdrop.on_resize();
    assert_eq!(page.timers.borrow().set, 0);
    assert!(!page.backdrop.resize_pending());

    assert!(page.backdrop.set_reduced_motion(false));
    assert!(page.frame_pending());
}

#[test]
fn starting_paused_by_os_preference() {
    let mut page = Page::with(1400.0, 800.0, None, true, false);
    assert!(!page.backdrop.apply());
    assert_eq!(page.backdrop.simulator().runs(), 0);
}

#[test]
fn resize_burst_restarts_once_after_quiet_period() {
    let mut page = Page::new(1400.0, 800.0);
    page.backdrop.apply();
    assert_eq!(page.backdrop.simulator().runs(), 1);

    for _ in 0..5 {
        page.backdrop.on_resize();
        page.advance(10);
    }
    // Last event at t=40; its timer is due at t=140.
    {
        let timers = page.timers.borrow();
        assert_eq!(timers.set, 5);
        assert_eq!(timers.cleared, 4);
        assert_eq!(timers.live.len(), 1);
        assert_eq!(timers.live[0].1, 140);
    }
    assert_eq!(page.backdrop.simulator().runs(), 1);

    page.set_viewport(1000.0, 700.0);
    page.advance(89); // t=139
    assert_eq!(page.backdrop.simulator().runs(), 1);
    page.advance(1); // t=140
    assert_eq!(page.backdrop.simulator().runs(), 2);
    assert_eq!(page.backdrop.simulator().field().len(), 25);
    assert!(!page.backdrop.resize_pending());

    page.advance(1_000);
    assert_eq!(page.backdrop.simulator().runs(), 2);
}

#[test]
fn pausing_cancels_pending_resize() {
    let mut page = Page::new(1400.0, 800.0);
    page.backdrop.apply();
    page.backdrop.on_resize();
    assert!(page.backdrop.resize_pending());

    page.backdrop.toggle();
    assert!(!page.backdrop.resize_pending());
    page.advance(500);
    assert_eq!(page.backdrop.simulator().runs(), 1);
    assert!(!page.frame_pending());
}

#[test]
fn shutdown_releases_everything() {
    let mut page = Page::new(1400.0, 800.0);
    page.backdrop.apply();
    page.pump_frame();
    page.backdrop.on_resize();

    page.backdrop.shutdown();
    assert!(!page.frame_pending());
    assert!(!page.backdrop.resize_pending());
    assert_eq!(page.visible_glows(), 0);
}

#[test]
fn stop_twice_equals_stop_once() {
    let (mut sim, surface, frames) = simulator(1400.0, 800.0, 11);
    sim.start();
    // Host fires the scheduled frame.
    frames.borrow_mut().pending.clear();
    sim.frame(true);
    assert_eq!(surface.borrow().visible.len(), 40);

    sim.stop();
    let cancelled = frames.borrow().cancelled;
    assert!(!sim.is_running());
    assert!(surface.borrow().visible.is_empty());

    sim.stop();
    assert_eq!(frames.borrow().cancelled, cancelled);
    assert!(frames.borrow().pending.is_empty());
    assert!(!sim.is_running());
    assert!(surface.borrow().visible.is_empty());
    assert!(sim.field().is_empty());
}

#[test]
fn start_cancels_in_flight_loop() {
    let (mut sim, _surface, frames) = simulator(800.0, 600.0, 2);
    sim.start();
    sim.start();
    let log = frames.borrow();
    assert_eq!(log.requested, 2);
    assert_eq!(log.cancelled, 1);
    assert_eq!(log.pending.len(), 1);
}

#[test]
fn paused_frame_neither_draws_nor_reschedules() {
    let (mut sim, surface, frames) = simulator(800.0, 600.0, 2);
    sim.start();
    frames.borrow_mut().pending.clear();
    sim.frame(false);
    assert!(!sim.is_running());
    assert!(frames.borrow().pending.is_empty());
    assert!(surface.borrow().visible.is_empty());
}

#[test]
fn refused_writes_do_not_break_toggling() {
    let (sim, _surface, _frames) = simulator(1400.0, 800.0, 4);
    let timers = std::rc::Rc::new(std::cell::RefCell::new(common::TimerLog::default()));
    let mut backdrop = Backdrop::new(
        sim,
        common::FakeTimer(timers),
        Box::new(ReadOnlyStore),
        false,
        false,
    );
    assert!(backdrop.apply());
    assert!(!backdrop.toggle());
    assert!(backdrop.toggle());
}

#[test]
fn memory_store_round_trips() {
    let mut store = MemoryStore::new();
    assert_eq!(store.get("bg-anim"), None);
    store.set("bg-anim", "off").unwrap();
    assert_eq!(store.get("bg-anim").as_deref(), Some("off"));
}
