use leptos::prelude::*;

use super::SectionId;
use crate::icons::{ICON_ARROW_RIGHT, ICON_ROCKET, Icon};

#[component]
pub fn CallToAction() -> impl IntoView {
    view! {
        <section class="section band-dark" data-section={SectionId::CallToAction.as_str()}>
            <div class="container container-narrow">
                <div class="panel cta-panel">
                    <div class="glow-layer">
                        <div class="glow glow-top-right accent-blue"></div>
                        <div class="glow glow-bottom-left accent-teal"></div>
                    </div>

                    <div class="cta-content">
                        <div class="icon-disc icon-disc-large accent-blue">
                            <Icon path=ICON_ROCKET size="48" />
                        </div>
                        <h2 class="section-title">"Ready to Start Forecasting?"</h2>
                        <p class="section-description">
                            "Transform your historical data into actionable business insights with our advanced forecasting engine."
                        </p>
                        <button class="btn btn-pill">
                            "Launch Forecast Tool"
                            <Icon path=ICON_ARROW_RIGHT class="btn-icon nudge-right" />
                        </button>
                        <p class="fine-print">
                            "No signup required • Process data securely • Get instant results"
                        </p>
                    </div>
                </div>
            </div>
        </section>
    }
}
