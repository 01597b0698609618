//! Tests for the reveal engine.

use super::*;

fn services_section() -> RevealTarget<&'static str> {
    RevealTarget::new(
        "services",
        [
            ("subtitle", ChildCategory::Header),
            ("title", ChildCategory::Header),
            ("card-1", ChildCategory::Card),
            ("card-2", ChildCategory::Card),
            ("button", ChildCategory::Item),
            ("card-3", ChildCategory::Card),
        ],
    )
}

#[test]
fn root_margin_pulls_trigger_above_viewport_bottom() {
    let options = VisibilityOptions {
        threshold: 0.1,
        bottom_margin_px: 50,
    };
    assert_eq!(options.root_margin(), "0px 0px -50px 0px");
}

#[test]
fn zero_margin_renders_plain_root_margin() {
    let options = VisibilityOptions {
        threshold: 0.3,
        bottom_margin_px: 0,
    };
    assert_eq!(options.root_margin(), "0px");
}

#[test]
fn selector_lists_every_marker() {
    assert_eq!(
        ChildCategory::selector(),
        ".reveal-header, .reveal-card, .reveal-item"
    );
}

#[test]
fn hidden_selector_covers_sections_and_children() {
    let selector = hidden_selector();
    assert_eq!(
        selector,
        ".scroll-animate, .reveal-header, .reveal-card, .reveal-item"
    );
    for category in ChildCategory::ALL {
        assert!(selector.contains(&format!(".{}", category.marker_class())));
    }
}

#[test]
fn category_parses_from_class_list() {
    assert_eq!(
        ChildCategory::from_class_list("service-card reveal-card"),
        Some(ChildCategory::Card)
    );
    assert_eq!(
        ChildCategory::from_class_list("  reveal-header  title "),
        Some(ChildCategory::Header)
    );
    assert_eq!(ChildCategory::from_class_list("service-card"), None);
    assert_eq!(ChildCategory::from_class_list(""), None);
}

#[test]
fn stagger_counts_siblings_per_category() {
    let target = services_section();
    let delays: Vec<_> = target
        .children()
        .iter()
        .map(|child| (child.element, child.delay_ms))
        .collect();

    assert_eq!(
        delays,
        vec![
            ("subtitle", 0),
            ("title", 0),
            ("card-1", 0),
            ("card-2", 100),
            ("button", 0),
            ("card-3", 200),
        ]
    );
}

#[test]
fn target_fires_once_under_toggling() {
    let mut target = services_section();

    assert!(target.observe(false).is_none());
    assert!(!target.is_revealed());

    assert_eq!(target.observe(true).map(<[_]>::len), Some(6));
    assert!(target.is_revealed());

    for visible in [false, true, false, true, true] {
        assert!(target.observe(visible).is_none());
        assert!(target.is_revealed(), "revealed must never revert");
    }
}

#[test]
fn engine_emits_section_then_children() {
    let mut engine = RevealEngine::new();
    engine.register(RevealTarget::new(
        "tools",
        [("header", ChildCategory::Header), ("figma", ChildCategory::Card)],
    ));

    let steps = engine.on_intersection(&"tools", true);

    assert_eq!(
        steps,
        vec![
            RevealStep::Section("tools"),
            RevealStep::Child {
                element: "header",
                delay_ms: 0
            },
            RevealStep::Child {
                element: "figma",
                delay_ms: 0
            },
        ]
    );
    assert_eq!(engine.pending(), 0);
}

#[test]
fn engine_ignores_unknown_elements() {
    let mut engine = RevealEngine::new();
    engine.register(services_section());
    assert!(engine.on_intersection(&"footer", true).is_empty());
    assert_eq!(engine.pending(), 1);
}

#[test]
fn engine_tracks_targets_independently() {
    let mut engine = RevealEngine::new();
    engine.register(services_section());
    engine.register(RevealTarget::new(
        "contact",
        Vec::<(&str, ChildCategory)>::new(),
    ));

    assert_eq!(engine.on_intersection(&"contact", true).len(), 1);
    assert_eq!(engine.pending(), 1);
    assert_eq!(engine.on_intersection(&"services", true).len(), 7);
    assert!(engine.on_intersection(&"services", true).is_empty());
    assert_eq!(engine.pending(), 0);
}

#[test]
fn unmounted_engine_emits_nothing() {
    let mut engine = RevealEngine::new();
    engine.register(services_section());

    engine.unmount();

    assert!(!engine.is_mounted());
    assert!(engine.on_intersection(&"services", true).is_empty());
    assert_eq!(engine.pending(), 1, "unmount must not mark targets revealed");
}

#[test]
fn one_shot_fires_once() {
    let mut shot = OneShot::default();
    assert!(!shot.has_fired());
    assert!(shot.fire());
    assert!(!shot.fire());
    assert!(shot.has_fired());
}

#[test]
fn badges_start_paused_and_run_once() {
    let mut badges = BadgeTrigger::default();
    assert_eq!(badges.initial(), PlayState::Paused);
    assert_eq!(badges.observe(false), None);
    assert_eq!(badges.observe(true), Some(PlayState::Running));
    assert_eq!(badges.observe(true), None);
    assert!(badges.has_fired());
    assert_eq!(PlayState::Running.css_value(), "running");
}
