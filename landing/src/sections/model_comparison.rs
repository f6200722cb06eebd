use leptos::prelude::*;

use super::SectionId;
use crate::content::{MODEL_PANELS, ModelPanel};
use crate::icons::Icon;

#[component]
pub fn ModelComparison() -> impl IntoView {
    view! {
        <section class="section band-dark" data-section={SectionId::ModelComparison.as_str()}>
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"Model Comparison"</h2>
                    <p class="section-description">
                        "Choose the right forecasting approach for your specific business needs"
                    </p>
                </div>
                <div class="model-grid">
                    {MODEL_PANELS.into_iter().map(|panel| view! { <ModelCard panel=panel /> }).collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ModelCard(panel: ModelPanel) -> impl IntoView {
    let bullet = panel.bullet_icon;

    view! {
        <article class={panel.accent.with("model-card")}>
            <div class="icon-disc">
                <Icon path=panel.icon size="40" />
            </div>
            <h3 class="model-name">{panel.name}</h3>
            <p class="model-tagline">{panel.tagline}</p>
            <ul class="model-points">
                {panel.points.into_iter().map(|point| view! {
                    <li class="model-point">
                        <Icon path=bullet class="bullet-icon" />
                        <span>{point}</span>
                    </li>
                }).collect::<Vec<_>>()}
            </ul>
        </article>
    }
}
