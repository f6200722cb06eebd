//! Browser side effects: smooth scroll to an anchor and the sample download.
//!
//! Components never touch `web_sys` directly; they go through [`Host`] so the
//! behavior can be exercised without a browser. Both actions are
//! fire-and-forget: nothing is returned to the UI and failures stay silent.

use wasm_bindgen::JsCast;

/// Identifier of the "How It Works" section, the hero button's scroll target.
pub const HOW_IT_WORKS_ID: &str = "how-it-works";

/// A static asset the host should save under a given file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DownloadRequest {
    /// Path of the asset inside the deployed bundle.
    pub href: &'static str,
    /// File name proposed to the user.
    pub file_name: &'static str,
}

/// The full vehicle sales dataset offered by the dataset preview.
pub const SAMPLE_DATASET: DownloadRequest = DownloadRequest {
    href: "/MVA_Vehicle_Sales_Counts_by_Month_for_Calendar_Year_2002_through_October_2024.csv",
    file_name: "sample_vehicle_sales_data.csv",
};

impl DownloadRequest {
    /// File name of the asset as it sits in the bundle (no leading slash).
    pub fn asset_file(&self) -> &'static str {
        self.href.trim_start_matches('/')
    }
}

/// The environment that performs scrolling and downloads.
pub trait Host {
    /// Smoothly scroll the element with `element_id` into view.
    /// Returns `false` without doing anything when no such element exists.
    fn scroll_into_view(&self, element_id: &str) -> bool;

    /// Ask the environment to save `request.href` as `request.file_name`.
    fn save_asset(&self, request: &DownloadRequest);
}

/// Scroll the page to a section on the same page.
pub fn scroll_to_section(host: &impl Host, section_id: &str) -> bool {
    let found = host.scroll_into_view(section_id);
    tracing::debug!(section_id, found, "scroll to section");
    found
}

/// Offer the sample dataset for download.
pub fn download_sample(host: &impl Host) {
    tracing::debug!(href = SAMPLE_DATASET.href, "download sample dataset");
    host.save_asset(&SAMPLE_DATASET);
}

/// [`Host`] backed by the live DOM.
///
/// Only meaningful on wasm32 inside a browser; on other targets the
/// `web_sys` calls are unavailable, so only construct it in event handlers.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserHost;

impl BrowserHost {
    fn document() -> Option<web_sys::Document> {
        web_sys::window().and_then(|window| window.document())
    }
}

impl Host for BrowserHost {
    fn scroll_into_view(&self, element_id: &str) -> bool {
        let Some(element) = Self::document().and_then(|doc| doc.get_element_by_id(element_id))
        else {
            return false;
        };

        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }

    fn save_asset(&self, request: &DownloadRequest) {
        let Some(document) = Self::document() else {
            return;
        };
        let Some(body) = document.body() else {
            return;
        };
        let Ok(link) = document
            .create_element("a")
            .map(|el| el.unchecked_into::<web_sys::HtmlAnchorElement>())
        else {
            return;
        };

        link.set_href(request.href);
        link.set_download(request.file_name);

        // Transient anchor: attach, click, detach.
        if body.append_child(&link).is_ok() {
            link.click();
            let _ = body.remove_child(&link);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;

    /// Records every side effect instead of performing it.
    #[derive(Default)]
    struct RecordingHost {
        present_ids: Vec<&'static str>,
        scrolled: RefCell<Vec<String>>,
        saved: RefCell<Vec<DownloadRequest>>,
    }

    impl RecordingHost {
        fn with_sections(ids: &[&'static str]) -> Self {
            Self {
                present_ids: ids.to_vec(),
                ..Default::default()
            }
        }
    }

    impl Host for RecordingHost {
        fn scroll_into_view(&self, element_id: &str) -> bool {
            if !self.present_ids.iter().any(|id| *id == element_id) {
                return false;
            }
            self.scrolled.borrow_mut().push(element_id.to_string());
            true
        }

        fn save_asset(&self, request: &DownloadRequest) {
            self.saved.borrow_mut().push(*request);
        }
    }

    #[test]
    fn scroll_reaches_how_it_works() {
        let host = RecordingHost::with_sections(&["hero", HOW_IT_WORKS_ID]);
        assert!(scroll_to_section(&host, HOW_IT_WORKS_ID));
        assert_eq!(*host.scrolled.borrow(), vec![HOW_IT_WORKS_ID.to_string()]);
    }

    #[test]
    fn scroll_to_missing_section_is_a_no_op() {
        let host = RecordingHost::with_sections(&["hero"]);
        assert!(!scroll_to_section(&host, HOW_IT_WORKS_ID));
        assert!(host.scrolled.borrow().is_empty());
        assert!(host.saved.borrow().is_empty());
    }

    #[test]
    fn download_requests_are_identical_across_clicks() {
        let host = RecordingHost::default();
        for _ in 0..3 {
            download_sample(&host);
        }

        let saved = host.saved.borrow();
        assert_eq!(saved.len(), 3);
        assert!(saved.iter().all(|req| *req == SAMPLE_DATASET));
        assert_eq!(saved[0].file_name, "sample_vehicle_sales_data.csv");
        assert_eq!(
            saved[0].href,
            "/MVA_Vehicle_Sales_Counts_by_Month_for_Calendar_Year_2002_through_October_2024.csv"
        );
    }

    #[test]
    fn asset_file_strips_root_slash() {
        assert_eq!(
            SAMPLE_DATASET.asset_file(),
            "MVA_Vehicle_Sales_Counts_by_Month_for_Calendar_Year_2002_through_October_2024.csv"
        );
    }
}
