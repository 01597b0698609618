//! setTimeout handle.

use crate::model::error::DomError;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// A one-shot timeout, cleared if dropped before it fires.
pub struct Timeout {
    id: i32,
    _callback: Closure<dyn FnMut()>,
}

impl Timeout {
    /// Run `callback` once after `delay_ms`.
    pub fn new(delay_ms: u32, callback: impl FnOnce() + 'static) -> Result<Self, DomError> {
        let mut callback = Some(callback);
        let closure: Closure<dyn FnMut()> = Closure::new(move || {
            if let Some(callback) = callback.take() {
                callback();
            }
        });

        let id = super::window()?
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                i32::try_from(delay_ms).unwrap_or(i32::MAX),
            )
            .map_err(|e| DomError::js("setTimeout", e))?;

        Ok(Self {
            id,
            _callback: closure,
        })
    }
}

impl Drop for Timeout {
    fn drop(&mut self) {
        if let Ok(window) = super::window() {
            window.clear_timeout_with_handle(self.id);
        }
    }
}
