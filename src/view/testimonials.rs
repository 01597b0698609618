//! Testimonial carousel.

use crate::model::content::TESTIMONIALS;
use crate::shell::carousel::client_x;
use crate::shell::{DragController, ResizeWatch};
use crate::state::carousel::{track_transition, CarouselSnapshot, CarouselState, TrackLayout, TESTIMONIAL_COUNT};
use crate::view::use_site_config;
use leptos::prelude::*;
use send_wrapper::SendWrapper;
use tracing::warn;

/// Draggable testimonial carousel.
#[component]
pub fn TestimonialsSection() -> impl IntoView {
    let config = use_site_config();
    let transition_ms = config.carousel_transition_ms;
    let breakpoint = config.compact_breakpoint_px;

    let snapshot = RwSignal::new(CarouselSnapshot::default());
    let layout = RwSignal::new(TrackLayout::WIDE);

    let controller = SendWrapper::new(DragController::new(
        CarouselState::new(TESTIMONIAL_COUNT, config.drag_threshold_px),
        move |next| {
            // The signal is gone once the section has been cleaned up.
            let _ = snapshot.try_set(next);
        },
    ));
    snapshot.set(controller.snapshot());

    let resize = match ResizeWatch::attach(move |width| {
        let _ = layout.try_set(TrackLayout::for_viewport(width, breakpoint));
    }) {
        Ok(watch) => Some(watch),
        Err(e) => {
            warn!(error = %e, "Viewport tracking unavailable, using wide carousel layout");
            None
        }
    };
    let resize = SendWrapper::new(resize);

    on_cleanup({
        let controller = controller.clone();
        move || {
            controller.abort();
            drop(resize);
        }
    });

    let on_pointer_down = {
        let controller = controller.clone();
        move |ev: leptos::ev::PointerEvent| {
            if let Some(x) = client_x(&ev) {
                controller.pointer_down(x);
            }
        }
    };
    let on_prev = {
        let controller = controller.clone();
        move |_| controller.prev()
    };
    let on_next = move |_| controller.next();

    view! {
        <section class="testimonials-section">
            <div class="testimonials-container">
                <div class="testimonials-subtitle">
                    <span class="subtitle-line"></span>
                    <span>"Clients Testimonials"</span>
                </div>
                <h2 class="testimonials-title">
                    "The Impact of My Work: "
                    <span class="testimonials-title-highlight">"Client Testimonials"</span>
                </h2>

                <div class="testimonials-carousel">
                    <div
                        class="testimonials-track"
                        class:dragging=move || snapshot.get().dragging
                        style:transform=move || layout.get().transform(&snapshot.get())
                        style:transition=move || track_transition(&snapshot.get(), transition_ms)
                        on:pointerdown=on_pointer_down
                    >
                        {TESTIMONIALS
                            .iter()
                            .enumerate()
                            .map(|(i, testimonial)| {
                                view! {
                                    <div
                                        class="testimonial-card"
                                        class:active=move || snapshot.get().current_index == i
                                    >
                                        <div class="testimonial-rating">
                                            <div class="stars">"★★★★★"</div>
                                            <span class="rating-number">{testimonial.rating}</span>
                                        </div>
                                        <div class="testimonial-content">
                                            <div class="quote-mark">"\""</div>
                                            <p>{testimonial.quote}</p>
                                        </div>
                                        <div class="testimonial-author">
                                            <div class="author-name">{testimonial.author}</div>
                                            <div class="author-title">{testimonial.role}</div>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="testimonials-navigation">
                    <button class="nav-btn nav-prev" aria-label="Previous testimonial" on:click=on_prev>
                        <img src="/bullet-point.gif" alt="Previous" class="nav-bullet" />
                    </button>
                    <button class="nav-btn nav-next" aria-label="Next testimonial" on:click=on_next>
                        <img src="/bullet-point.gif" alt="Next" class="nav-bullet" />
                    </button>
                </div>
            </div>
        </section>
    }
}
