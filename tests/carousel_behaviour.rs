//! Black-box carousel behaviour through the public API.
//!
//! Drives the state machine the way the pointer handlers do and checks what
//! the track would render.

use vaum_site::state::carousel::{
    track_transition, CarouselSnapshot, CarouselState, Direction, TrackLayout, INITIAL_INDEX,
    TESTIMONIAL_COUNT,
};

fn swipe(state: &mut CarouselState, from: f64, to: f64) -> Option<Direction> {
    state.begin_drag(from);
    // A few intermediate moves, as a real pointer would report.
    let steps = 5;
    for i in 1..=steps {
        state.drag_to(from + (to - from) * f64::from(i) / f64::from(steps));
    }
    state.end_drag()
}

#[test]
fn swiping_left_through_all_testimonials_wraps() {
    let mut state = CarouselState::default();
    let mut seen = vec![state.current_index()];
    for _ in 0..TESTIMONIAL_COUNT {
        assert_eq!(swipe(&mut state, 600.0, 300.0), Some(Direction::Next));
        seen.push(state.current_index());
    }
    assert_eq!(seen, vec![1, 2, 0, 1]);
}

#[test]
fn swiping_right_goes_back() {
    let mut state = CarouselState::default();
    assert_eq!(swipe(&mut state, 100.0, 400.0), Some(Direction::Prev));
    assert_eq!(state.current_index(), 0);
    assert_eq!(swipe(&mut state, 100.0, 400.0), Some(Direction::Prev));
    assert_eq!(state.current_index(), 2);
}

#[test]
fn exactly_threshold_is_not_enough() {
    let mut state = CarouselState::default();
    assert_eq!(swipe(&mut state, 200.0, 150.0), None);
    assert_eq!(state.current_index(), INITIAL_INDEX);
}

#[test]
fn dragging_track_follows_pointer_without_transition() {
    let mut state = CarouselState::default();
    state.begin_drag(500.0);
    state.drag_to(460.0);
    let snapshot = state.snapshot();

    assert_eq!(TrackLayout::WIDE.transform(&snapshot), "translateX(-40px)");
    assert_eq!(track_transition(&snapshot, 500), "none");

    state.end_drag();
    let settled = state.snapshot();
    assert_eq!(TrackLayout::WIDE.transform(&settled), "translateX(0px)");
    assert_eq!(track_transition(&settled, 500), "transform 500ms ease");
}

#[test]
fn buttons_do_not_disturb_a_gesture() {
    let mut state = CarouselState::default();
    state.begin_drag(0.0);
    state.drag_to(-20.0);
    state.next();
    assert!(state.is_dragging());
    assert_eq!(state.drag_offset_px(), -20.0);
    assert_eq!(state.current_index(), 2);
}

#[test]
fn default_snapshot_shows_middle_card() {
    let snapshot = CarouselSnapshot::default();
    assert_eq!(snapshot.current_index, INITIAL_INDEX);
    assert!(!snapshot.dragging);
    insta::assert_snapshot!(TrackLayout::COMPACT.transform(&snapshot), @"translateX(calc(50% - 140px - 296px))");
}
