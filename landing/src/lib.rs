//! # forecast-landing
//!
//! Landing page for the R-Studio Replica sales forecasting engine, written as
//! [Leptos](https://leptos.dev/) components.
//!
//! The same component tree is used two ways:
//!
//! - **Client** - `forecast-landing-web` mounts [`LandingPage`] in the browser
//!   (feature `csr`), where the hero scroll and the CSV download are live.
//! - **Static** - [`render_page`] (feature `ssr`, on by default) renders a
//!   complete HTML document, used by `forecast-export` to prerender the site.
//!
//! ## Architecture
//!
//! - [`content`] - fixed copy: features, model panels, steps, sample rows
//! - [`accent`] - accent color families mapped to CSS modifiers
//! - [`icons`] - inline SVG glyphs
//! - [`sections`] - one component per page region
//! - [`actions`] - scroll and download side effects behind the [`actions::Host`] seam
//! - [`styles`] - the stylesheet
//!
//! ```rust
//! use forecast_landing::{PageOptions, render_page};
//!
//! let html = render_page(&PageOptions::default());
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains("Sample Dataset"));
//! ```

pub mod accent;
pub mod actions;
pub mod content;
pub mod icons;
pub mod sections;
pub mod styles;

use leptos::prelude::*;
use serde::Deserialize;

use sections::{
    CallToAction, DatasetPreview, Footer, Hero, HowItWorks, ModelComparison, WhatItDoes,
};
use styles::LANDING_CSS;

/// The whole page: seven sections, always in this order.
#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="landing">
            <Hero />
            <WhatItDoes />
            <ModelComparison />
            <DatasetPreview />
            <HowItWorks />
            <CallToAction />
            <Footer />
        </div>
    }
}

/// Inline `<style>` element carrying [`LANDING_CSS`].
#[component]
pub fn LandingStyles() -> impl IntoView {
    view! { <style>{LANDING_CSS}</style> }
}

/// Document-level settings for [`render_page`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PageOptions {
    /// Contents of `<title>`
    pub title: String,
    /// `<meta name="description">` content
    pub description: String,
    /// `lang` attribute of `<html>`
    pub lang: String,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            title: format!("{} | Sales Forecasting Engine", content::PRODUCT_NAME),
            description: "Forecast business KPIs using advanced ARIMA & Prophet models with industry-grade accuracy".into(),
            lang: "en".into(),
        }
    }
}

#[cfg(feature = "ssr")]
#[component]
fn PageDocument(options: PageOptions) -> impl IntoView {
    view! {
        <html lang={options.lang}>
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1.0" />
                <meta name="description" content={options.description} />
                <title>{options.title}</title>
                <LandingStyles />
            </head>
            <body>
                <LandingPage />
            </body>
        </html>
    }
}

/// Render the landing page as a complete HTML document, `<!DOCTYPE html>` included.
#[cfg(feature = "ssr")]
pub fn render_page(options: &PageOptions) -> String {
    use leptos::tachys::view::RenderHtml;

    let doc = view! { <PageDocument options=options.clone() /> };
    let html = doc.to_html();

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::actions::HOW_IT_WORKS_ID;
    use crate::content::{SAMPLE_ROWS, STEPS};
    use crate::sections::SectionId;
    use pretty_assertions::assert_eq;

    fn render_default() -> String {
        render_page(&PageOptions::default())
    }

    fn position(html: &str, needle: &str) -> usize {
        html.find(needle)
            .unwrap_or_else(|| panic!("missing {needle:?} in rendered page"))
    }

    #[test]
    fn renders_full_document() {
        let html = render_default();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html"));
        assert!(html.contains("lang=\"en\""));
        assert!(html.contains("R-Studio Replica | Sales Forecasting Engine"));
        assert!(html.contains("<style>"));
    }

    #[test]
    fn rendering_is_idempotent() {
        assert_eq!(render_default(), render_default());
    }

    #[test]
    fn sections_render_once_in_page_order() {
        let html = render_default();
        let mut last = 0;

        for id in SectionId::ALL {
            let marker = format!("data-section=\"{}\"", id.as_str());
            assert_eq!(html.matches(&marker).count(), 1, "{marker}");
            let at = position(&html, &marker);
            assert!(at > last, "{} rendered out of order", id.as_str());
            last = at;
        }
    }

    #[test]
    fn sample_table_has_exactly_the_fixed_rows() {
        let html = render_default();

        assert_eq!(html.matches("data-row=\"").count(), SAMPLE_ROWS.len());
        assert_eq!(html.matches("sample-row muted").count(), 1);

        let mut last = 0;
        for (index, row) in SAMPLE_ROWS.iter().enumerate() {
            let at = position(&html, &format!("data-row=\"{index}\""));
            assert!(at > last);
            last = at;

            if !row.is_elided() {
                let cell = position(&html[at..], row.new_sales);
                let used = position(&html[at..], row.used_sales);
                assert!(cell < used, "row {index} columns out of order");
            }
        }
    }

    #[test]
    fn hero_targets_how_it_works_section() {
        let html = render_default();

        let target = format!("data-scroll-target=\"{HOW_IT_WORKS_ID}\"");
        let anchor = format!("id=\"{HOW_IT_WORKS_ID}\"");
        assert_eq!(html.matches(&anchor).count(), 1);
        assert!(position(&html, &target) < position(&html, &anchor));
    }

    #[test]
    fn steps_keep_their_order() {
        let html = render_default();
        let positions: Vec<usize> = STEPS.iter().map(|s| position(&html, s.title)).collect();

        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
        assert!(html.contains("step-card accent-purple"));
    }

    #[test]
    fn download_button_and_dataset_footnote_render() {
        let html = render_default();

        assert!(html.contains("Download Sample CSV"));
        assert!(html.contains("(276 records)"));
    }

    #[test]
    fn custom_title_is_escaped() {
        let options = PageOptions {
            title: "Forecasts <beta>".into(),
            ..Default::default()
        };
        let html = render_page(&options);

        assert!(html.contains("Forecasts &lt;beta&gt;"));
        assert!(!html.contains("<beta>"));
    }

    #[test]
    fn single_section_renders_standalone() {
        use leptos::tachys::view::RenderHtml;

        let html = view! { <ModelComparison /> }.to_html();
        assert!(html.contains("ARIMA Model"));
        assert!(html.contains("Prophet Model"));
        assert!(html.contains("model-card accent-teal"));
    }
}
