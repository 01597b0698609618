//! VAUM Studio site
//!
//! Client-side portfolio website rendered with Leptos.
//!
//! Follows the Pure Core / Impure Shell split: `state` and `model` hold the
//! animation and carousel state machines and never touch the browser; `dom`
//! and `shell` apply their decisions to the live page; `view` renders markup.

pub mod config;
pub mod dom;
pub mod logging;
pub mod model;
pub mod shell;
pub mod state;
pub mod view;

pub use view::App;

use crate::model::error::SiteError;
use leptos::prelude::*;
use tracing::info;

pub use logging::FALLBACK_LOG_FILTER;

/// Resolve configuration, start logging and mount the app on `<body>`.
///
/// `search` is the page's `location.search`.
///
/// # Errors
///
/// Returns an error if the bundled configuration is invalid or a tracing
/// subscriber was already installed.
pub fn start(search: &str) -> Result<(), SiteError> {
    let config = config::resolve(search)?;

    logging::init_with_fallback(&config.log_level)?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        log_level = %config.log_level,
        "Starting VAUM Studio site"
    );

    leptos::mount::mount_to_body(move || view! { <App config=config /> });
    Ok(())
}

#[cfg(test)]
mod tests;
