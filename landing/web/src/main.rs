// Forecast landing page — browser entry point (Leptos 0.8, csr)

use forecast_landing::{LandingPage, LandingStyles};
use leptos::prelude::*;
use wasm_bindgen::JsValue;

fn main() {
    console_error_panic_hook::set_once();
    web_sys::console::info_1(&JsValue::from_str(&format!(
        "[forecast-landing] v{} mounted",
        env!("CARGO_PKG_VERSION")
    )));
    leptos::mount::mount_to_body(App);
}

#[component]
fn App() -> impl IntoView {
    view! {
        <LandingStyles />
        <LandingPage />
    }
}
