use leptos::prelude::*;

use super::SectionId;
use crate::actions::{BrowserHost, HOW_IT_WORKS_ID, scroll_to_section};
use crate::content::PRODUCT_NAME;
use crate::icons::{ICON_ARROW_DOWN, ICON_TREND_UP, Icon};

#[component]
pub fn Hero() -> impl IntoView {
    let launch = move |_| {
        scroll_to_section(&BrowserHost, HOW_IT_WORKS_ID);
    };

    view! {
        <section class="hero" data-section={SectionId::Hero.as_str()}>
            <div class="glow-layer">
                <div class="glow glow-top-right accent-blue"></div>
                <div class="glow glow-bottom-left accent-teal"></div>
            </div>

            <div class="hero-content">
                <div class="hero-badge">
                    <Icon path=ICON_TREND_UP size="48" />
                </div>

                <h1 class="hero-title">
                    {PRODUCT_NAME}
                    <span class="hero-subtitle">
                        "(RStudio’s forecasting engine, reimagined for the web using Python + Streamlit + React.)"
                    </span>
                </h1>

                <p class="hero-description">
                    "Forecast business KPIs using advanced ARIMA & Prophet models with "
                    <span class="highlight">"industry-grade accuracy"</span>
                </p>

                <button class="btn btn-pill" data-scroll-target=HOW_IT_WORKS_ID on:click=launch>
                    "Launch Forecast Tool"
                    <Icon path=ICON_ARROW_DOWN class="btn-icon nudge-down" />
                </button>
            </div>

            // Scroll hint
            <div class="scroll-hint">
                <Icon path=ICON_ARROW_DOWN size="24" />
            </div>
        </section>
    }
}
