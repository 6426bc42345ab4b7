// The derived "should animate" predicate and the persisted toggle.

use fx_core::motion::toggle_label;
use fx_core::{MotionState, Toggle};

#[test]
fn should_animate_truth_table() {
    for user in [Toggle::On, Toggle::Off] {
        for reduced in [false, true] {
            for hidden in [false, true] {
                let state = MotionState::new(user, reduced, hidden);
                let expected = user == Toggle::On && !reduced && !hidden;
                assert_eq!(
                    state.should_animate(),
                    expected,
                    "user={:?} reduced={} hidden={}",
                    user,
                    reduced,
                    hidden
                );
            }
        }
    }
}

#[test]
fn default_state_animates() {
    assert!(MotionState::default().should_animate());
    assert_eq!(MotionState::default().pause_reason(), None);
}

#[test]
fn stored_values_parse_leniently() {
    assert_eq!(Toggle::from_stored(None), Toggle::On);
    assert_eq!(Toggle::from_stored(Some("on")), Toggle::On);
    assert_eq!(Toggle::from_stored(Some("off")), Toggle::Off);
    assert_eq!(Toggle::from_stored(Some("OFF")), Toggle::On);
    assert_eq!(Toggle::from_stored(Some("")), Toggle::On);
}

#[test]
fn flip_round_trips() {
    assert_eq!(Toggle::On.flip(), Toggle::Off);
    assert_eq!(Toggle::On.flip().flip(), Toggle::On);
    assert_eq!(Toggle::Off.as_str(), "off");
    assert_eq!(Toggle::On.as_str(), "on");
}

#[test]
fn pause_reason_prefers_user_choice() {
    assert_eq!(
        MotionState::new(Toggle::Off, true, true).pause_reason(),
        Some("turned off")
    );
    assert_eq!(
        MotionState::new(Toggle::On, true, true).pause_reason(),
        Some("reduced motion")
    );
    assert_eq!(
        MotionState::new(Toggle::On, false, true).pause_reason(),
        Some("tab hidden")
    );
}

#[test]
fn label_reflects_state() {
    assert_eq!(toggle_label(true), "Animation: on");
    assert_eq!(toggle_label(false), "Animation: off");
}
