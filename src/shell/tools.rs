//! Favourite-tools percentage run.

use crate::dom::{FrameLoop, Timeout, VisibilityObserver};
use crate::model::error::DomError;
use crate::state::reveal::{OneShot, VisibilityOptions};
use crate::state::tool_progress::{ToolAnimation, ToolProgress};
use crate::state::tween::FrameStep;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, warn};
use web_sys::Element;

/// Section observed for the percentage run.
pub const SECTION_SELECTOR: &str = ".tools-section";

struct ToolsState {
    animation: ToolAnimation,
    shot: OneShot,
    delay: Option<Timeout>,
    frames: Option<FrameLoop>,
    cancelled: bool,
}

/// Live wiring for the tools section.
///
/// Percentages are pushed to `on_progress` rather than written to the DOM so
/// the view can render them reactively.
pub struct ToolsBinding {
    state: Rc<RefCell<ToolsState>>,
    _observer: VisibilityObserver,
}

impl ToolsBinding {
    /// Observe the tools section under `root`. `Ok(None)` if it is absent.
    pub fn attach(
        root: &Element,
        options: VisibilityOptions,
        start_delay_ms: f64,
        duration_ms: f64,
        on_progress: impl Fn(ToolProgress) + 'static,
    ) -> Result<Option<Self>, DomError> {
        let Some(section) = root
            .query_selector(SECTION_SELECTOR)
            .map_err(|e| DomError::js("querySelector", e))?
        else {
            return Ok(None);
        };

        let state = Rc::new(RefCell::new(ToolsState {
            animation: ToolAnimation::new(start_delay_ms, duration_ms),
            shot: OneShot::default(),
            delay: None,
            frames: None,
            cancelled: false,
        }));
        let on_progress: Rc<dyn Fn(ToolProgress)> = Rc::new(on_progress);

        let observer = VisibilityObserver::new(options, {
            let state = Rc::clone(&state);
            move |_element, intersecting| {
                let mut guard = state.borrow_mut();
                if !intersecting || !guard.shot.fire() {
                    return;
                }
                let delay_ms = guard.animation.start_delay_ms().round() as u32;
                debug!(delay_ms, "Tools section visible, scheduling percentages");

                let weak = Rc::downgrade(&state);
                let on_progress = Rc::clone(&on_progress);
                match Timeout::new(delay_ms, move || {
                    if let Some(state) = weak.upgrade() {
                        start_frames(&state, on_progress);
                    }
                }) {
                    Ok(timeout) => guard.delay = Some(timeout),
                    Err(e) => warn!(error = %e, "Tools animation unavailable"),
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

fn start_frames(state: &Rc<RefCell<ToolsState>>, on_progress: Rc<dyn Fn(ToolProgress)>) {
    if state.borrow().cancelled {
        return;
    }
    let frames = FrameLoop::start({
        let state = Rc::downgrade(state);
        move |timestamp| {
            let Some(state) = state.upgrade() else {
                return FrameStep::Finished;
            };
            let (step, progress) = {
                let mut guard = state.borrow_mut();
                if guard.cancelled {
                    return FrameStep::Finished;
                }
                guard.animation.start(timestamp);
                let Some(step) = guard.animation.tick(timestamp) else {
                    return FrameStep::Finished;
                };
                (step, guard.animation.progress())
            };
            // Borrow released: the callback may re-render synchronously.
            on_progress(progress);
            step
        }
    });
    match frames {
        Ok(frames) => state.borrow_mut().frames = Some(frames),
        Err(e) => warn!(error = %e, "Tools animation unavailable"),
    }
}

impl Drop for ToolsBinding {
    fn drop(&mut self) {
        let mut state = self.state.borrow_mut();
        state.cancelled = true;
        state.delay.take();
        state.frames.take();
    }
}
