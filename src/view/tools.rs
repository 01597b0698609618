//! Favourite tools section.

use crate::state::tool_progress::{Tool, ToolProgress};
use leptos::prelude::*;

/// Favourite tools with their animated percentages.
#[component]
pub fn ToolsSection(
    /// Percentages pushed by the tools binding.
    progress: RwSignal<ToolProgress>,
) -> impl IntoView {
    view! {
        <section class="tools-section">
            <div class="tools-container">
                <div class="tools-header">
                    <div class="tools-subtitle">
                        <span class="subtitle-line"></span>
                        <span>"My Favorite Tools"</span>
                    </div>
                    <h2 class="tools-title">
                        <i>"Exploring the Tools"</i>
                        <br />
                        "Behind My Design"
                    </h2>
                </div>

                <div class="tools-grid">
                    {Tool::ALL
                        .into_iter()
                        .map(|tool| {
                            view! {
                                <div class="tool-card">
                                    <div class="tool-oval">
                                        <div class="tool-logo-circle">
                                            <img src=tool.logo_src() alt=tool.label() />
                                        </div>
                                        <div class="tool-percentage">
                                            {move || format!("{}%", progress.get().get(tool))}
                                        </div>
                                    </div>
                                    <div class="tool-name">{tool.label()}</div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
