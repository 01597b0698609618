//! 404 page.

use crate::model::route::Route;
use leptos::prelude::*;
use leptos_router::components::A;

/// 404 page with a link home.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found-page">
            <div class="not-found-container">
                <div class="not-found-content">
                    <h1 class="error-code">"404"</h1>
                    <h2 class="error-title">"Page Not Found"</h2>
                    <p class="error-description">
                        "Oops! The page you're looking for doesn't exist. It might have been moved or deleted."
                    </p>
                    <A href=Route::Home.path() attr:class="btn-home">
                        <span>"Go Back Home"</span>
                        <div class="home-icon-wrapper">
                            <img src="/home.svg" alt="" aria-hidden="true" />
                        </div>
                    </A>
                </div>
            </div>
        </div>
    }
}
