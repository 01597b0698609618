//! Home page about section.

use crate::model::content::{ABOUT_BADGES, ABOUT_DESCRIPTION, ABOUT_STATS, DESIGNER_NAME};
use crate::model::route::Route;
use leptos::prelude::*;
use leptos_router::components::A;

/// "Who is" section. Counters start at 0 and are driven by
/// [`crate::shell::AboutBinding`] through their `data-target`.
#[component]
pub fn AboutSection() -> impl IntoView {
    view! {
        <section class="about-section scroll-animate">
            <div class="about-container">
                <div class="about-left">
                    <div class="about-image-wrap">
                        <img src="/about.jpg" alt=DESIGNER_NAME class="about-image" />
                    </div>
                    {ABOUT_BADGES
                        .iter()
                        .enumerate()
                        .map(|(i, badge)| {
                            view! {
                                <div class=format!("about-badge about-badge-{}", i + 1)>{*badge}</div>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="about-right">
                    <div class="about-subtitle reveal-header">
                        <span class="subtitle-line"></span>
                        <span>"About Me"</span>
                    </div>
                    <h2 class="about-title reveal-header">
                        <span class="about-title-lead">"Who is"</span> " " <i>{DESIGNER_NAME}</i> " ?"
                    </h2>
                    <p class="about-desc reveal-item">{ABOUT_DESCRIPTION}</p>
                    <div class="about-stats">
                        {ABOUT_STATS
                            .iter()
                            .map(|stat| {
                                view! {
                                    <div class="about-stat reveal-item">
                                        <div class="stat-number">
                                            <span class="count-up" data-target=stat.target.to_string()>
                                                "0"
                                            </span>
                                            "+"
                                        </div>
                                        <div class="stat-label">{stat.label}</div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                    <div class="about-cta reveal-item">
                        <A href=Route::Services.path() attr:class="btn-about-services">
                            <span>"View All Services"</span>
                            <div class="btn-about-icon">
                                <img src="/bullet-point.gif" alt="View All" class="btn-about-bullet" />
                            </div>
                        </A>
                        <span class="about-signature">{DESIGNER_NAME}</span>
                    </div>
                </div>
            </div>
        </section>
    }
}
