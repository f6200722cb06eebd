use leptos::prelude::*;

use super::SectionId;
use crate::content::{FEATURES, Feature};
use crate::icons::Icon;

#[component]
pub fn WhatItDoes() -> impl IntoView {
    view! {
        <section class="section band-slate" data-section={SectionId::WhatItDoes.as_str()}>
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"What This Tool Does"</h2>
                    <p class="section-description">
                        "Professional-grade forecasting capabilities powered by advanced machine learning models"
                    </p>
                </div>
                <div class="feature-grid">
                    {FEATURES.into_iter().map(|feature| view! { <FeatureCard feature=feature /> }).collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeatureCard(feature: Feature) -> impl IntoView {
    view! {
        <article class="feature-card">
            <div class="icon-disc accent-blue">
                <Icon path=feature.icon size="32" />
            </div>
            <h3 class="card-title">{feature.title}</h3>
            <p class="card-text">{feature.description}</p>
        </article>
    }
}
