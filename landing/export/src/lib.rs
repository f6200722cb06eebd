//! Static export of the forecasting landing page.
//!
//! Resolves an [`ExportConfig`], renders the page with
//! [`forecast_landing::render_page`] and writes it, plus any public assets,
//! to an output directory ready to be served.

pub mod bundle;
pub mod config;
pub mod error;

pub use bundle::{ExportPlan, ExportReport, export};
pub use config::{CONFIG_FILE_NAME, ExportConfig, OutputConfig};
pub use error::ExportError;
