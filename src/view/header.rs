//! Site header: split navigation around the logo, plus the mobile menu.

use crate::model::content::STUDIO_NAME;
use crate::model::route::{mobile_nav, NavItem, Route, NAV_LEFT, NAV_RIGHT};
use leptos::prelude::*;
use leptos_router::components::A;

/// Site header: split navigation around the logo plus the mobile menu.
#[component]
pub fn Header(
    /// Current route, for the active link.
    route: Memo<Route>,
) -> impl IntoView {
    let menu_open = RwSignal::new(false);
    let close_menu = move |_| menu_open.set(false);

    let nav_link = move |item: NavItem| {
        view! {
            <A href=item.route.path() attr:class="nav-link">
                <span class:active=move || route.get() == item.route>{item.label}</span>
            </A>
        }
    };

    view! {
        <header class="header">
            <div class="header-container">
                <nav class="nav-left">
                    <A href=Route::Home.path() attr:class="nav-home" attr:aria-label="Home">
                        <img src="/home.svg" alt="Home" class="nav-home-icon" />
                    </A>
                    {NAV_LEFT.into_iter().map(nav_link).collect_view()}
                </nav>

                <A href=Route::Home.path() attr:class="logo">
                    <img src="/logo.svg" alt=STUDIO_NAME class="logo-image" />
                </A>

                <nav class="nav-right">
                    {NAV_RIGHT.into_iter().map(nav_link).collect_view()}
                    <A href=Route::Contact.path() attr:class="btn-contact">
                        "Contact Us"
                    </A>
                </nav>

                <button
                    class="mobile-menu-toggle"
                    class:open=move || menu_open.get()
                    aria-label="Toggle menu"
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>

            <Show when=move || menu_open.get()>
                <nav class="mobile-menu">
                    {mobile_nav()
                        .map(|item| {
                            view! {
                                <A href=item.route.path() attr:class="mobile-nav-link">
                                    <span on:click=close_menu>{item.label}</span>
                                </A>
                            }
                        })
                        .collect_view()}
                    <A href=Route::Contact.path() attr:class="mobile-nav-link mobile-contact">
                        <span on:click=close_menu>"Contact Us"</span>
                    </A>
                </nav>
            </Show>
        </header>
    }
}
