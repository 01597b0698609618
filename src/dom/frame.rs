//! requestAnimationFrame loop.

use crate::model::error::DomError;
use crate::state::tween::FrameStep;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

type FrameCallback = Closure<dyn FnMut(f64)>;

struct FrameState {
    /// Pending request id, if a frame is scheduled.
    request: Cell<Option<i32>>,
    /// Set once the step function finishes or the loop is cancelled.
    stopped: Cell<bool>,
    callback: RefCell<Option<FrameCallback>>,
}

/// Calls a step function once per frame with the frame timestamp until it
/// returns [`FrameStep::Finished`].
///
/// Dropping the handle cancels the pending frame; the step function never
/// runs again after that.
pub struct FrameLoop {
    state: Rc<FrameState>,
}

impl FrameLoop {
    /// Schedule the first frame.
    pub fn start(mut step: impl FnMut(f64) -> FrameStep + 'static) -> Result<Self, DomError> {
        let state = Rc::new(FrameState {
            request: Cell::new(None),
            stopped: Cell::new(false),
            callback: RefCell::new(None),
        });

        let weak = Rc::downgrade(&state);
        let callback: FrameCallback = Closure::new(move |timestamp: f64| {
            let Some(state) = weak.upgrade() else {
                return;
            };
            state.request.set(None);
            if state.stopped.get() {
                return;
            }
            match step(timestamp) {
                FrameStep::Continue => {
                    if let Err(e) = schedule(&state) {
                        tracing::warn!(error = %e, "Frame loop stopped early");
                        state.stopped.set(true);
                    }
                }
                FrameStep::Finished => state.stopped.set(true),
            }
        });
        *state.callback.borrow_mut() = Some(callback);

        schedule(&state)?;
        Ok(Self { state })
    }

    /// Stop without waiting for drop.
    pub fn cancel(&self) {
        self.state.stopped.set(true);
        if let Some(id) = self.state.request.take() {
            if let Ok(window) = super::window() {
                let _ = window.cancel_animation_frame(id);
            }
        }
    }
}

fn schedule(state: &FrameState) -> Result<(), DomError> {
    let callback = state.callback.borrow();
    let Some(callback) = callback.as_ref() else {
        return Ok(());
    };
    let id = super::window()?
        .request_animation_frame(callback.as_ref().unchecked_ref())
        .map_err(|e| DomError::js("requestAnimationFrame", e))?;
    state.request.set(Some(id));
    Ok(())
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.cancel();
    }
}
