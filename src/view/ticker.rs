//! Scrolling services ticker.

use crate::model::content::ticker_items;
use leptos::prelude::*;

/// Infinite service ticker. `reverse` runs the loop in the opposite direction.
#[component]
pub fn Ticker(
    /// Run the loop right to left.
    reverse: bool,
) -> impl IntoView {
    view! {
        <section class="services-section" class:services-section-reverse=reverse>
            <div class="services-container">
                <div class="services-bar">
                    {ticker_items()
                        .map(|service| {
                            view! {
                                <div class="service-item">
                                    <span class="star-icon">
                                        <img src="/octicon_north-star-24.svg" alt="" width="32" height="32" />
                                    </span>
                                    <span class="service-text">{service}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
