//! About-section count-up counters and orbiting badges.

use crate::dom::{self, FrameLoop, VisibilityObserver};
use crate::model::error::DomError;
use crate::state::counter::{parse_target, CounterGroup};
use crate::state::reveal::{BadgeTrigger, OneShot, VisibilityOptions};
use crate::state::tween::FrameStep;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, warn};
use web_sys::Element;

/// Section observed for counters and badges.
pub const SECTION_SELECTOR: &str = ".about-section";
/// Count-up numbers inside the section.
pub const COUNTER_SELECTOR: &str = ".about-stat .count-up";
/// Orbiting badges inside the section.
pub const BADGE_SELECTOR: &str = ".about-badge";

const PLAY_STATE_PROPERTY: &str = "animation-play-state";

struct AboutState {
    counters: CounterGroup,
    counter_shot: OneShot,
    badges: BadgeTrigger,
    frames: Option<FrameLoop>,
}

/// Live wiring for the about section.
pub struct AboutBinding {
    state: Rc<RefCell<AboutState>>,
    _observer: VisibilityObserver,
}

impl AboutBinding {
    /// Returns `Ok(None)` when the view has no about section, or it holds
    /// neither counters nor badges.
    pub fn attach(
        root: &Element,
        options: VisibilityOptions,
        counter_duration_ms: f64,
    ) -> Result<Option<Self>, DomError> {
        let Some(section) = root
            .query_selector(SECTION_SELECTOR)
            .map_err(|e| DomError::js("querySelector", e))?
        else {
            return Ok(None);
        };
        let counter_elements = dom::query_all(&section, COUNTER_SELECTOR)?;
        let badge_elements = dom::query_all(&section, BADGE_SELECTOR)?;
        if counter_elements.is_empty() && badge_elements.is_empty() {
            return Ok(None);
        }

        let targets = counter_elements
            .iter()
            .map(|el| parse_target(el.get_attribute("data-target").as_deref()));
        let badges = BadgeTrigger::default();
        for badge in &badge_elements {
            dom::set_style(badge, PLAY_STATE_PROPERTY, badges.initial().css_value());
        }

        let state = Rc::new(RefCell::new(AboutState {
            counters: CounterGroup::new(targets, counter_duration_ms),
            counter_shot: OneShot::default(),
            badges,
            frames: None,
        }));
        let counter_elements = Rc::new(counter_elements);

        let observer = VisibilityObserver::new(options, {
            let state = Rc::clone(&state);
            move |_element, intersecting| {
                let mut guard = state.borrow_mut();
                if let Some(play_state) = guard.badges.observe(intersecting) {
                    debug!(badges = badge_elements.len(), "Starting badge animation");
                    for badge in &badge_elements {
                        dom::set_style(badge, PLAY_STATE_PROPERTY, play_state.css_value());
                    }
                }
                if intersecting && !guard.counters.is_empty() && guard.counter_shot.fire() {
                    debug!(counters = guard.counters.counters().len(), "Starting count-up");
                    drop(guard);
                    start_counters(&state, &counter_elements);
                }
            }
        })?;
        observer.observe(&section);

        Ok(Some(Self {
            state,
            _observer: observer,
        }))
    }
}

fn start_counters(state: &Rc<RefCell<AboutState>>, elements: &Rc<Vec<Element>>) {
    let frames = FrameLoop::start({
        let state = Rc::downgrade(state);
        let elements = Rc::clone(elements);
        move |timestamp| {
            let Some(state) = state.upgrade() else {
                return FrameStep::Finished;
            };
            let mut guard = state.borrow_mut();
            guard.counters.start(timestamp);
            let Some(step) = guard.counters.tick(timestamp) else {
                return FrameStep::Finished;
            };
            for (element, counter) in elements.iter().zip(guard.counters.counters()) {
                element.set_text_content(Some(&counter.displayed().to_string()));
            }
            step
        }
    });
    match frames {
        Ok(frames) => state.borrow_mut().frames = Some(frames),
        Err(e) => warn!(error = %e, "Count-up animation unavailable"),
    }
}

impl Drop for AboutBinding {
    fn drop(&mut self) {
        let mut state = self.state.borrow_mut();
        state.counters.cancel();
        state.frames.take();
    }
}
