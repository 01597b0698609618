//! Home page.

use crate::model::content::{DESIGNER_NAME, HERO_DESCRIPTION, SERVICE_CARDS};
use crate::model::route::Route;
use crate::shell;
use crate::state::ToolProgress;
use crate::view::about_section::AboutSection;
use crate::view::contact::ContactSection;
use crate::view::testimonials::TestimonialsSection;
use crate::view::ticker::Ticker;
use crate::view::tools::ToolsSection;
use crate::view::use_page_animations;
use leptos::html::Div;
use leptos::prelude::*;
use leptos_router::components::A;
use tracing::warn;

/// The home page. With `scroll_to_contact` it scrolls to the form once mounted.
#[component]
pub fn HomePage(
    /// Scroll to the contact section once animations are attached.
    scroll_to_contact: bool,
) -> impl IntoView {
    let root = NodeRef::<Div>::new();
    let tools = RwSignal::new(ToolProgress::default());

    use_page_animations(root, Some(tools), move || {
        if scroll_to_contact {
            if let Err(e) = shell::scroll_to_contact() {
                warn!(error = %e, "Failed to scroll to contact section");
            }
        }
    });

    view! {
        <div class="home" node_ref=root>
            <Hero />
            <Ticker reverse=false />
            <ServicesCards />
            <AboutSection />
            <ToolsSection progress=tools />
            <ContactSection />
            <TestimonialsSection />
            <Ticker reverse=true />
        </div>
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="hero-container">
                <div class="hero-left">
                    <div class="greeting-box">
                        <span>"Hello There!"</span>
                    </div>
                    <h1 class="hero-title">
                        "I'm " <i><span class="underlined">{DESIGNER_NAME}</span></i> ", Graphic Designer."
                    </h1>
                    <p class="hero-description">{HERO_DESCRIPTION}</p>
                    <div class="hero-buttons">
                        <A href=Route::Projects.path() attr:class="btn-portfolio">
                            <span>"View My Portfolio"</span>
                            <div class="play-icon">
                                <img src="/play (1).gif" alt="Play" />
                            </div>
                        </A>
                        <A href=Route::Contact.path() attr:class="btn-hire">
                            "Hire Me"
                        </A>
                    </div>
                </div>

                <div class="hero-right">
                    <div class="image-container">
                        <img src="/Group 1171275258.jpg" alt=DESIGNER_NAME class="hero-image" />
                        <div class="hero-badge hero-badge-left">
                            <span class="hero-badge-text">"Wireframe Design"</span>
                        </div>
                        <div class="hero-badge hero-badge-right">
                            <span class="hero-badge-text">"Website Design"</span>
                        </div>
                        <div class="hire-circle">
                            <span class="hire-text">"HIRE ME • HIRE ME • HIRE ME • HIRE ME •"</span>
                            <div class="hire-center"></div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ServicesCards() -> impl IntoView {
    view! {
        <section class="services-cards-section scroll-animate">
            <div class="services-cards-header reveal-header">
                <div class="services-subtitle">
                    <span class="subtitle-line"></span>
                    <span>"My Services"</span>
                </div>
                <h2 class="services-cards-title">
                    <i>"Services"</i> " I Provide"
                </h2>
                <A href=Route::Services.path() attr:class="btn-view-all">
                    <span>"View All Services"</span>
                    <div class="btn-view-all-icon">
                        <img src="/bullet-point.gif" alt="View All" class="btn-bullet-icon" />
                    </div>
                </A>
            </div>

            <div class="services-cards-grid">
                {SERVICE_CARDS
                    .iter()
                    .map(|card| {
                        view! {
                            <div class="service-card reveal-card">
                                <div class="service-card-icon">
                                    <img src=card.icon_src alt=card.icon_alt />
                                </div>
                                <h3 class="service-card-title">{card.title}</h3>
                                <p class="service-card-desc">{card.description}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
