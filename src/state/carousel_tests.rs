//! Tests for the carousel state machine.

use super::*;

fn carousel_at(index: usize) -> CarouselState {
    let mut state = CarouselState::default();
    state.go_to(index);
    state
}

fn drag(state: &mut CarouselState, from: f64, to: f64) -> Option<Direction> {
    state.begin_drag(from);
    state.drag_to(to);
    state.end_drag()
}

#[test]
fn starts_on_middle_card_idle() {
    let state = CarouselState::default();
    assert_eq!(state.current_index(), INITIAL_INDEX);
    assert!(!state.is_dragging());
    assert_eq!(state.drag_offset_px(), 0.0);
}

#[test]
fn next_wraps_forward() {
    let mut state = carousel_at(2);
    state.next();
    assert_eq!(state.current_index(), 0);
}

#[test]
fn prev_wraps_backward() {
    let mut state = carousel_at(0);
    state.prev();
    assert_eq!(state.current_index(), 2);
}

#[test]
fn next_and_prev_are_inverse_for_every_index() {
    for index in 0..TESTIMONIAL_COUNT {
        let mut state = carousel_at(index);
        state.next();
        state.prev();
        assert_eq!(state.current_index(), index, "next then prev from {index}");

        state.prev();
        state.next();
        assert_eq!(state.current_index(), index, "prev then next from {index}");
    }
}

#[test]
fn explicit_steps_leave_drag_state_alone() {
    let mut state = CarouselState::default();
    state.begin_drag(100.0);
    state.drag_to(80.0);

    state.next();

    assert!(state.is_dragging());
    assert_eq!(state.drag_offset_px(), -20.0);
}

#[test]
fn drag_tracks_offset_from_start() {
    let mut state = CarouselState::default();
    state.begin_drag(300.0);
    state.drag_to(360.0);
    assert!(state.is_dragging());
    assert_eq!(state.drag_offset_px(), 60.0);
    state.drag_to(250.0);
    assert_eq!(state.drag_offset_px(), -50.0);
}

#[test]
fn drag_left_past_threshold_advances() {
    let mut state = carousel_at(1);
    assert_eq!(drag(&mut state, 400.0, 349.0), Some(Direction::Next));
    assert_eq!(state.current_index(), 2);
    assert_eq!(state.drag_offset_px(), 0.0);
    assert!(!state.is_dragging());
}

#[test]
fn drag_right_past_threshold_goes_back() {
    let mut state = carousel_at(0);
    assert_eq!(drag(&mut state, 400.0, 451.0), Some(Direction::Prev));
    assert_eq!(state.current_index(), 2);
    assert_eq!(state.drag_offset_px(), 0.0);
}

#[test]
fn negative_threshold_is_taken_as_magnitude() {
    let mut state = CarouselState::new(TESTIMONIAL_COUNT, -50.0);
    assert_eq!(state.threshold_px(), 50.0);
    assert_eq!(drag(&mut state, 0.0, -51.0), Some(Direction::Next));
}

#[test]
fn drag_exactly_at_threshold_does_not_navigate() {
    let mut state = carousel_at(1);
    assert_eq!(drag(&mut state, 400.0, 450.0), None);
    assert_eq!(drag(&mut state, 400.0, 350.0), None);
    assert_eq!(state.current_index(), 1);
}

#[test]
fn short_drag_resets_offset_without_navigating() {
    let mut state = carousel_at(1);
    state.begin_drag(200.0);
    state.drag_to(230.0);
    assert_eq!(state.end_drag(), None);
    assert_eq!(state.current_index(), 1);
    assert_eq!(state.drag_offset_px(), 0.0);
    assert!(!state.is_dragging());
}

#[test]
fn only_final_offset_counts_after_reversal() {
    let mut state = carousel_at(1);
    state.begin_drag(500.0);
    state.drag_to(300.0); // far left
    state.drag_to(700.0); // far right
    state.drag_to(520.0); // settle just right of start
    assert_eq!(state.end_drag(), None);
    assert_eq!(state.current_index(), 1);
}

#[test]
fn moves_while_idle_are_ignored() {
    let mut state = CarouselState::default();
    state.drag_to(900.0);
    assert_eq!(state.drag_offset_px(), 0.0);
    assert_eq!(state.end_drag(), None);
    assert_eq!(state.current_index(), INITIAL_INDEX);
}

#[test]
fn abort_resets_without_navigating() {
    let mut state = carousel_at(1);
    state.begin_drag(0.0);
    state.drag_to(-400.0);
    state.abort_drag();
    assert_eq!(state.current_index(), 1);
    assert_eq!(state.drag_offset_px(), 0.0);
    assert!(!state.is_dragging());
}

#[test]
fn non_finite_positions_do_not_poison_offset() {
    let mut state = CarouselState::default();
    state.begin_drag(10.0);
    state.drag_to(f64::NAN);
    assert_eq!(state.drag_offset_px(), 0.0);
}

#[test]
fn single_entry_carousel_stays_put() {
    let mut state = CarouselState::new(1, 50.0);
    assert_eq!(state.current_index(), 0);
    state.next();
    state.prev();
    assert_eq!(drag(&mut state, 0.0, -200.0), Some(Direction::Next));
    assert_eq!(state.current_index(), 0);
}

#[test]
fn layout_switches_at_breakpoint() {
    assert_eq!(TrackLayout::for_viewport(480.0, 480.0), TrackLayout::COMPACT);
    assert_eq!(TrackLayout::for_viewport(481.0, 480.0), TrackLayout::WIDE);
}

#[test]
fn wide_transform_centres_active_card() {
    let mut snapshot = CarouselState::default().snapshot();
    insta::assert_snapshot!(TrackLayout::WIDE.transform(&snapshot), @"translateX(0px)");

    snapshot.current_index = 2;
    insta::assert_snapshot!(TrackLayout::WIDE.transform(&snapshot), @"translateX(-702px)");

    snapshot.current_index = 0;
    snapshot.drag_offset_px = -35.0;
    insta::assert_snapshot!(TrackLayout::WIDE.transform(&snapshot), @"translateX(667px)");
}

#[test]
fn compact_transform_follows_drag() {
    let mut snapshot = CarouselState::default().snapshot();
    insta::assert_snapshot!(
        TrackLayout::COMPACT.transform(&snapshot),
        @"translateX(calc(50% - 140px - 296px))"
    );

    snapshot.current_index = 0;
    snapshot.drag_offset_px = 40.0;
    insta::assert_snapshot!(
        TrackLayout::COMPACT.transform(&snapshot),
        @"translateX(calc(50% - 140px + 40px))"
    );
}

#[test]
fn transition_disabled_while_dragging() {
    let mut state = CarouselState::default();
    assert_eq!(track_transition(&state.snapshot(), 500), "transform 500ms ease");
    state.begin_drag(0.0);
    assert_eq!(track_transition(&state.snapshot(), 500), "none");
}
