//! Page chrome shared by every route.

use crate::model::route::Route;
use crate::view::footer::Footer;
use crate::view::header::Header;
use leptos::prelude::*;

/// Shared page chrome. The footer follows [`Route::shows_footer`].
#[component]
pub fn Layout(
    /// Current route; decides whether the footer shows.
    route: Memo<Route>,
    /// Page body.
    children: Children,
) -> impl IntoView {
    view! {
        <div class="layout">
            <Header route=route />
            <main class="main-content">{children()}</main>
            <Show when=move || route.get().shows_footer()>
                <Footer />
            </Show>
        </div>
    }
}
