//! Site footer.

use crate::model::content::{ContactLinkKind, CONTACT_LINKS, DESIGNER_NAME, STUDIO_NAME, STUDIO_TAGLINE};
use crate::model::route::mobile_nav;
use chrono::{Datelike, Utc};
use leptos::prelude::*;
use leptos_router::components::A;

/// Copyright line for `year`.
pub fn copyright(year: i32) -> String {
    format!("© {year} {STUDIO_NAME}. Designed by {DESIGNER_NAME}. All rights reserved.")
}

/// Site footer with navigation and the current year.
#[component]
pub fn Footer() -> impl IntoView {
    let year = Utc::now().year();

    view! {
        <footer class="footer">
            <div class="footer-container">
                <div class="footer-brand">
                    <h3 class="footer-title">{STUDIO_NAME}</h3>
                    <p class="footer-tagline">{STUDIO_TAGLINE}</p>
                </div>

                <nav class="footer-nav">
                    <h4>"Quick Links"</h4>
                    <ul>
                        {mobile_nav()
                            .map(|item| {
                                view! {
                                    <li>
                                        <A href=item.route.path()>{item.label}</A>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </nav>

                <div class="footer-contact">
                    <h4>"Contact"</h4>
                    <ul>
                        {CONTACT_LINKS
                            .iter()
                            .filter(|link| link.kind != ContactLinkKind::Instagram)
                            .map(|link| {
                                view! {
                                    <li>
                                        <a href=link.href>{link.label}</a>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>

                <div class="footer-social">
                    <h4>"Follow"</h4>
                    {CONTACT_LINKS
                        .iter()
                        .filter(|link| link.opens_new_tab())
                        .map(|link| {
                            view! {
                                <a href=link.href target="_blank" rel="noreferrer" class="social-link">
                                    {link.label}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <div class="footer-bottom">
                <p>{copyright(year)}</p>
            </div>
        </footer>
    }
}
