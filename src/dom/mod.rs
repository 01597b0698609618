//! Owned handles over browser callback APIs.
//!
//! Every handle here releases its browser registration when dropped
//! (observer disconnected, frame or timeout cancelled, listener removed), so
//! a view tears everything down by dropping what it holds.

pub mod frame;
pub mod listener;
pub mod observer;
pub mod timer;

pub use frame::FrameLoop;
pub use listener::EventSubscription;
pub use observer::VisibilityObserver;
pub use timer::Timeout;

use crate::model::error::DomError;

/// The global window.
pub fn window() -> Result<web_sys::Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}

/// The window's document.
pub fn document() -> Result<web_sys::Document, DomError> {
    window()?.document().ok_or(DomError::NoDocument)
}

/// Elements under `root` matching `selector`, in document order.
///
/// Nodes that are not elements are skipped.
pub fn query_all(root: &web_sys::Element, selector: &str) -> Result<Vec<web_sys::Element>, DomError> {
    use wasm_bindgen::JsCast;

    let nodes = root
        .query_selector_all(selector)
        .map_err(|e| DomError::js("querySelectorAll", e))?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
        .collect())
}

/// Add a class, ignoring failures (the element may already be detached).
pub fn add_class(element: &web_sys::Element, class: &str) {
    if let Err(e) = element.class_list().add_1(class) {
        tracing::warn!(error = %DomError::js("classList.add", e), class, "Failed to add class");
    }
}

/// Set an inline style property, ignoring failures.
pub fn set_style(element: &web_sys::Element, property: &str, value: &str) {
    use wasm_bindgen::JsCast;

    let Some(element) = element.dyn_ref::<web_sys::HtmlElement>() else {
        return;
    };
    if let Err(e) = element.style().set_property(property, value) {
        tracing::warn!(error = %DomError::js("style.setProperty", e), property, "Failed to set style");
    }
}
