//! Root component and page dispatch.

use crate::config::ResolvedConfig;
use crate::model::route::{Page, Route};
use crate::shell;
use crate::view::about_page::AboutPage;
use crate::view::home::HomePage;
use crate::view::layout::Layout;
use crate::view::not_found::NotFoundPage;
use leptos::prelude::*;
use leptos_router::components::Router;
use leptos_router::hooks::use_location;
use tracing::{debug, warn};

/// Application root. `config` is shared with every view through context.
#[component]
pub fn App(
    /// Resolved settings; defaults when omitted.
    #[prop(optional)]
    config: Option<ResolvedConfig>,
) -> impl IntoView {
    provide_context(config.unwrap_or_default());

    view! {
        <Router>
            <Pages />
        </Router>
    }
}

#[component]
fn Pages() -> impl IntoView {
    let location = use_location();
    let route = Memo::new(move |_| Route::from_path(&location.pathname.get()));

    Effect::new(move |previous: Option<Route>| {
        let current = route.get();
        if previous.is_some_and(|previous| previous != current) {
            debug!(?current, "Route changed");
            if current != Route::Contact {
                if let Err(e) = shell::scroll_to_top() {
                    warn!(error = %e, "Failed to reset scroll position");
                }
            }
        }
        current
    });

    view! {
        <Layout route=route>
            {move || match route.get().page() {
                Page::Home { scroll_to_contact } => {
                    view! { <HomePage scroll_to_contact=scroll_to_contact /> }.into_any()
                }
                Page::About => view! { <AboutPage /> }.into_any(),
                Page::NotFound => view! { <NotFoundPage /> }.into_any(),
            }}
        </Layout>
    }
}
