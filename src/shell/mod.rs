//! Impure shell: binds the pure state machines to the live DOM.
//!
//! Each binding owns its observers, timers and listeners; dropping it
//! releases them all. A binding that fails to attach is logged and skipped.
//! If the reveal binding is the one missing, every hidden element is revealed
//! immediately so the page still renders with its content visible.

pub mod about;
pub mod carousel;
pub mod reveal;
pub mod tools;

pub use about::AboutBinding;
pub use carousel::{DragController, ResizeWatch};
pub use reveal::RevealBinding;
pub use tools::ToolsBinding;

use crate::config::ResolvedConfig;
use crate::dom;
use crate::model::error::DomError;
use crate::state::ToolProgress;
use tracing::{debug, warn};
use web_sys::Element;

/// Id of the contact section anchor.
pub const CONTACT_ANCHOR_ID: &str = "contact";

/// All scroll-driven behaviour of one mounted view.
pub struct PageAnimations {
    _reveal: Option<RevealBinding>,
    _about: Option<AboutBinding>,
    _tools: Option<ToolsBinding>,
}

impl PageAnimations {
    /// Attach every binding whose markup is present under `root`.
    pub fn attach(
        root: &Element,
        config: &ResolvedConfig,
        on_tools_progress: impl Fn(ToolProgress) + 'static,
    ) -> Self {
        let reveal = degrade("reveal", RevealBinding::attach(root, config.reveal));
        if reveal.is_none() {
            match reveal::reveal_all(root) {
                Ok(shown) => debug!(shown, "Content revealed without animation"),
                Err(e) => warn!(error = %e, "Hidden content could not be revealed"),
            }
        }
        let about = degrade(
            "about",
            AboutBinding::attach(root, config.counter_visibility(), config.counter_duration_ms),
        )
        .flatten();
        let tools = degrade(
            "tools",
            ToolsBinding::attach(
                root,
                config.tools_visibility(),
                config.tools_start_delay_ms,
                config.tools_duration_ms,
                on_tools_progress,
            ),
        )
        .flatten();

        debug!(
            reveal_sections = reveal.as_ref().map_or(0, RevealBinding::pending),
            about = about.is_some(),
            tools = tools.is_some(),
            "Page animations attached"
        );
        Self {
            _reveal: reveal,
            _about: about,
            _tools: tools,
        }
    }
}

fn degrade<T>(binding: &'static str, result: Result<T, DomError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(binding, error = %e, "Animation binding unavailable, content shown statically");
            None
        }
    }
}

/// Smooth-scroll the contact section into view.
pub fn scroll_to_contact() -> Result<(), DomError> {
    let document = dom::document()?;
    let Some(section) = document.get_element_by_id(CONTACT_ANCHOR_ID) else {
        debug!("No contact section to scroll to");
        return Ok(());
    };
    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    section.scroll_into_view_with_scroll_into_view_options(&options);
    Ok(())
}

/// Jump to the top of the page (route changes).
pub fn scroll_to_top() -> Result<(), DomError> {
    dom::window()?.scroll_to_with_x_and_y(0.0, 0.0);
    Ok(())
}
