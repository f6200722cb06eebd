use leptos::prelude::*;

use super::SectionId;
use crate::actions::HOW_IT_WORKS_ID;
use crate::content::{STEPS, Step};
use crate::icons::Icon;

#[component]
pub fn HowItWorks() -> impl IntoView {
    view! {
        <section id=HOW_IT_WORKS_ID class="section band-dark" data-section={SectionId::HowItWorks.as_str()}>
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"How It Works"</h2>
                    <p class="section-description">"Get professional forecasts in three simple steps"</p>
                </div>

                <div class="steps">
                    // Desktop connector line
                    <div class="steps-connector"></div>
                    <div class="steps-grid">
                        {STEPS.into_iter().enumerate().map(|(index, step)| view! {
                            <StepCard number={index + 1} step=step />
                        }).collect::<Vec<_>>()}
                    </div>
                </div>

                <div class="steps-footer">
                    <div class="chip">
                        <span class="chip-label">"Ready to start?"</span>
                        <span class="chip-accent">"Launch the tool above ↑"</span>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn StepCard(number: usize, step: Step) -> impl IntoView {
    view! {
        <div class={step.accent.with("step-card")}>
            <div class="step-number">
                <span>{number}</span>
            </div>
            <div class="icon-disc">
                <Icon path=step.icon size="32" />
            </div>
            <h3 class="card-title">{step.title}</h3>
            <p class="card-text">{step.description}</p>
        </div>
    }
}
