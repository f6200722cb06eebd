use leptos::prelude::*;

use super::SectionId;
use crate::icons::{ICON_ENVELOPE, ICON_GITHUB_LOGO, Icon};

const AUTHOR: &str = "Arjoneel Ghosh";

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer" data-section={SectionId::Footer.as_str()}>
            <div class="container">
                <div class="footer-links">
                    <button class="footer-icon-btn" aria-label="GitHub">
                        <Icon path=ICON_GITHUB_LOGO />
                    </button>
                    <button class="footer-icon-btn" aria-label="Email">
                        <Icon path=ICON_ENVELOPE />
                    </button>
                </div>
                <div class="footer-credit">
                    <span>"Built by"</span>
                    <span class="footer-author">{AUTHOR}</span>
                </div>
                <p class="footer-stack">"Powered by Python, ARIMA & Prophet"</p>
                <p class="footer-copyright">
                    "© 2024 Sales Forecasting Engine. Made by " {AUTHOR} "."
                </p>
            </div>
        </footer>
    }
}
