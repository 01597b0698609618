//! Property-based tests for the testimonial carousel.
//!
//! Properties:
//! 1. `next` then `prev` (and the reverse) is the identity for every index
//! 2. A drag strictly beyond the threshold steps exactly once, toward the drag
//! 3. Anything within the threshold leaves the index alone
//! 4. The offset is zero whenever no gesture is in flight
//! 5. Only the released offset decides; intermediate moves never navigate

use crate::state::carousel::{
    CarouselState, Direction, DEFAULT_DRAG_THRESHOLD_PX, TESTIMONIAL_COUNT,
};
use proptest::prelude::*;

// ===== Strategies =====

fn arb_index() -> impl Strategy<Value = usize> {
    0..TESTIMONIAL_COUNT
}

fn arb_threshold() -> impl Strategy<Value = f64> {
    prop_oneof![Just(DEFAULT_DRAG_THRESHOLD_PX), 1.0f64..200.0]
}

#[derive(Debug, Clone, Copy)]
enum Input {
    Next,
    Prev,
    Down(f64),
    Move(f64),
    Up,
}

fn arb_input() -> impl Strategy<Value = Input> {
    prop_oneof![
        Just(Input::Next),
        Just(Input::Prev),
        (-2000.0f64..2000.0).prop_map(Input::Down),
        (-2000.0f64..2000.0).prop_map(Input::Move),
        Just(Input::Up),
    ]
}

fn carousel_at(index: usize, threshold: f64) -> CarouselState {
    let mut state = CarouselState::new(TESTIMONIAL_COUNT, threshold);
    state.go_to(index);
    state
}

fn apply(state: &mut CarouselState, input: Input) {
    match input {
        Input::Next => state.next(),
        Input::Prev => state.prev(),
        Input::Down(x) => state.begin_drag(x),
        Input::Move(x) => state.drag_to(x),
        Input::Up => {
            state.end_drag();
        }
    }
}

// ===== Properties =====

proptest! {
    #[test]
    fn next_then_prev_is_identity(index in arb_index()) {
        let mut state = carousel_at(index, DEFAULT_DRAG_THRESHOLD_PX);
        state.next();
        state.prev();
        prop_assert_eq!(state.current_index(), index);

        state.prev();
        state.next();
        prop_assert_eq!(state.current_index(), index);
    }

    #[test]
    fn drag_beyond_threshold_steps_once(
        index in arb_index(),
        threshold in arb_threshold(),
        start in -500.0f64..500.0,
        extra in 0.5f64..400.0,
        leftward in any::<bool>(),
    ) {
        let mut state = carousel_at(index, threshold);
        let travel = threshold + extra;
        let end = if leftward { start - travel } else { start + travel };

        state.begin_drag(start);
        state.drag_to(end);
        let direction = state.end_drag();

        let (expected_direction, expected_index) = if leftward {
            (Direction::Next, (index + 1) % TESTIMONIAL_COUNT)
        } else {
            (Direction::Prev, (index + TESTIMONIAL_COUNT - 1) % TESTIMONIAL_COUNT)
        };
        prop_assert_eq!(direction, Some(expected_direction));
        prop_assert_eq!(state.current_index(), expected_index);
        prop_assert_eq!(state.drag_offset_px(), 0.0);
        prop_assert!(!state.is_dragging());
    }

    #[test]
    fn drag_within_threshold_never_navigates(
        index in arb_index(),
        threshold in arb_threshold(),
        start in -500.0f64..500.0,
        fraction in -0.99f64..=0.99,
    ) {
        let mut state = carousel_at(index, threshold);
        state.begin_drag(start);
        state.drag_to(start + fraction * threshold);

        prop_assert_eq!(state.end_drag(), None);
        prop_assert_eq!(state.current_index(), index);
        prop_assert_eq!(state.drag_offset_px(), 0.0);
    }

    #[test]
    fn offset_is_zero_whenever_idle(inputs in prop::collection::vec(arb_input(), 0..40)) {
        let mut state = CarouselState::default();
        for input in inputs {
            apply(&mut state, input);
            prop_assert!(state.current_index() < TESTIMONIAL_COUNT);
            if !state.is_dragging() {
                prop_assert_eq!(state.drag_offset_px(), 0.0);
            }
        }
    }

    #[test]
    fn only_released_offset_decides(
        index in arb_index(),
        wiggle in prop::collection::vec(-1000.0f64..1000.0, 1..20),
    ) {
        let mut state = carousel_at(index, DEFAULT_DRAG_THRESHOLD_PX);
        state.begin_drag(0.0);
        for x in &wiggle {
            state.drag_to(*x);
            prop_assert_eq!(state.current_index(), index);
        }
        // Settle back near the origin before letting go.
        state.drag_to(10.0);
        prop_assert_eq!(state.end_drag(), None);
        prop_assert_eq!(state.current_index(), index);
    }
}

#[test]
fn threshold_plus_one_matches_documented_examples() {
    let threshold = DEFAULT_DRAG_THRESHOLD_PX;
    for index in 0..TESTIMONIAL_COUNT {
        let mut left = carousel_at(index, threshold);
        left.begin_drag(400.0);
        left.drag_to(400.0 - (threshold + 1.0));
        left.end_drag();
        assert_eq!(left.current_index(), (index + 1) % 3);

        let mut right = carousel_at(index, threshold);
        right.begin_drag(400.0);
        right.drag_to(400.0 + threshold + 1.0);
        right.end_drag();
        assert_eq!(right.current_index(), (index + 2) % 3);
    }
}
