//! Landing page sections, top to bottom.
//!
//! Every section root carries `data-section` with its [`SectionId`].

mod call_to_action;
mod dataset_preview;
mod footer;
mod hero;
mod how_it_works;
mod model_comparison;
mod what_it_does;

pub use call_to_action::CallToAction;
pub use dataset_preview::DatasetPreview;
pub use footer::Footer;
pub use hero::Hero;
pub use how_it_works::HowItWorks;
pub use model_comparison::ModelComparison;
pub use what_it_does::WhatItDoes;

/// Stable identifier of each page section, rendered as `data-section`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Hero,
    WhatItDoes,
    ModelComparison,
    DatasetPreview,
    HowItWorks,
    CallToAction,
    Footer,
}

impl SectionId {
    /// Every section in page order.
    pub const ALL: [SectionId; 7] = [
        SectionId::Hero,
        SectionId::WhatItDoes,
        SectionId::ModelComparison,
        SectionId::DatasetPreview,
        SectionId::HowItWorks,
        SectionId::CallToAction,
        SectionId::Footer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SectionId::Hero => "hero",
            SectionId::WhatItDoes => "what-it-does",
            SectionId::ModelComparison => "model-comparison",
            SectionId::DatasetPreview => "dataset-preview",
            SectionId::HowItWorks => "how-it-works",
            SectionId::CallToAction => "call-to-action",
            SectionId::Footer => "footer",
        }
    }
}
