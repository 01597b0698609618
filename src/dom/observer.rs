//! IntersectionObserver handle.

use crate::model::error::DomError;
use crate::state::reveal::VisibilityOptions;
use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Observes elements and reports `(target, is_intersecting)` pairs.
///
/// Dropping the handle disconnects the observer; no callback runs afterwards.
pub struct VisibilityObserver {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

impl VisibilityObserver {
    /// Create an observer that calls `on_change` once per entry.
    pub fn new(
        options: VisibilityOptions,
        mut on_change: impl FnMut(&Element, bool) + 'static,
    ) -> Result<Self, DomError> {
        let callback: ObserverCallback =
            Closure::new(move |entries: Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    on_change(&entry.target(), entry.is_intersecting());
                }
            });

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        init.set_root_margin(&options.root_margin());

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
                .map_err(|e| DomError::js("new IntersectionObserver", e))?;

        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    /// Start reporting visibility changes for `element`.
    pub fn observe(&self, element: &Element) {
        self.observer.observe(element);
    }
}

impl Drop for VisibilityObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
