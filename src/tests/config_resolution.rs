//! Whitebox checks that the bundled configuration drives the animations.

use crate::config::{resolve, ResolvedConfig};
use crate::state::carousel::{CarouselState, TrackLayout, TESTIMONIAL_COUNT};

#[test]
fn bundled_config_matches_defaults() {
    let resolved = resolve("").expect("bundled config parses");
    assert_eq!(resolved, ResolvedConfig::default());
}

#[test]
fn bundled_threshold_drives_carousel() {
    let config = resolve("?log=debug").expect("bundled config parses");
    assert_eq!(config.log_level, "debug");

    let mut state = CarouselState::new(TESTIMONIAL_COUNT, config.drag_threshold_px);
    state.begin_drag(0.0);
    state.drag_to(-(config.drag_threshold_px + 1.0));
    state.end_drag();
    assert_eq!(state.current_index(), 2);
}

#[test]
fn compact_breakpoint_is_inclusive() {
    let config = ResolvedConfig::default();
    assert_eq!(
        TrackLayout::for_viewport(config.compact_breakpoint_px, config.compact_breakpoint_px),
        TrackLayout::COMPACT
    );
    assert_eq!(
        TrackLayout::for_viewport(config.compact_breakpoint_px + 1.0, config.compact_breakpoint_px),
        TrackLayout::WIDE
    );
}
