//! About page.

use crate::model::content::{STUDIO_NAME, STUDIO_STATS, STUDIO_STORY, TEAM};
use crate::view::use_page_animations;
use leptos::html::Div;
use leptos::prelude::*;

/// The `/about` page: story, fixed figures and team.
#[component]
pub fn AboutPage() -> impl IntoView {
    let root = NodeRef::<Div>::new();
    use_page_animations(root, None, || {});

    view! {
        <div class="about-page" node_ref=root>
            <section class="about-hero scroll-animate">
                <div class="container">
                    <h1 class="reveal-header">{format!("About {STUDIO_NAME}")}</h1>
                    <p class="about-hero-subtitle reveal-item">
                        "We are a passionate team of designers and developers creating digital experiences that matter."
                    </p>
                </div>
            </section>

            <section class="about-story scroll-animate">
                <div class="container">
                    <div class="story-content">
                        <div class="story-text">
                            <h2 class="reveal-header">"Our Story"</h2>
                            {STUDIO_STORY
                                .iter()
                                .map(|paragraph| view! { <p class="reveal-item">{*paragraph}</p> })
                                .collect_view()}
                        </div>
                        <div class="story-stats">
                            {STUDIO_STATS
                                .iter()
                                .map(|(figure, label)| {
                                    view! {
                                        <div class="stat reveal-card">
                                            <h3>{*figure}</h3>
                                            <p>{*label}</p>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </section>

            <section class="team scroll-animate">
                <div class="container">
                    <h2 class="reveal-header">"Meet Our Team"</h2>
                    <div class="team-grid">
                        {TEAM
                            .iter()
                            .map(|member| {
                                view! {
                                    <div class="team-member reveal-card">
                                        <div class="member-avatar">{member.avatar}</div>
                                        <h3>{member.name}</h3>
                                        <p>{member.role}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </section>
        </div>
    }
}
