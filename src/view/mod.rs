//! Leptos components.
//!
//! Views render static markup plus a few signals; everything scroll- or
//! pointer-driven is delegated to [`crate::shell`] once the view is mounted.

pub mod about_page;
pub mod about_section;
pub mod app;
pub mod contact;
pub mod footer;
pub mod header;
pub mod home;
pub mod layout;
pub mod not_found;
pub mod testimonials;
pub mod ticker;
pub mod tools;

pub use app::App;

use crate::config::ResolvedConfig;
use crate::shell::PageAnimations;
use crate::state::ToolProgress;
use leptos::html::Div;
use leptos::prelude::*;
use send_wrapper::SendWrapper;
use std::cell::RefCell;
use std::rc::Rc;

/// Resolved configuration from context, or the defaults when none was provided.
pub fn use_site_config() -> ResolvedConfig {
    use_context::<ResolvedConfig>().unwrap_or_default()
}

/// Attach [`PageAnimations`] to `root` once it is mounted and release them on
/// cleanup. `after_attach` runs once, right after the bindings exist.
pub fn use_page_animations(
    root: NodeRef<Div>,
    tools: Option<RwSignal<ToolProgress>>,
    after_attach: impl Fn() + 'static,
) {
    let config = use_site_config();
    let guard: SendWrapper<Rc<RefCell<Option<PageAnimations>>>> =
        SendWrapper::new(Rc::new(RefCell::new(None)));

    Effect::new({
        let guard = guard.clone();
        move |_| {
            let Some(element) = root.get() else {
                return;
            };
            if guard.borrow().is_some() {
                return;
            }
            let animations = PageAnimations::attach(&element, &config, move |progress| {
                if let Some(tools) = tools {
                    tools.set(progress);
                }
            });
            *guard.borrow_mut() = Some(animations);
            after_attach();
        }
    });

    on_cleanup(move || {
        guard.borrow_mut().take();
    });
}
