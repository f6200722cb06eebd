//! Configuration file support for the exporter.
//!
//! Loads an optional `forecast-landing.toml`. Every key has a default, so an
//! empty file (or no file at all) yields a working configuration.

use std::path::{Path, PathBuf};

use forecast_landing::PageOptions;
use serde::Deserialize;

use crate::error::ExportError;

/// File looked up in the working directory when `--config` is not given.
pub const CONFIG_FILE_NAME: &str = "forecast-landing.toml";

/// Root configuration structure
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Document title, description and language
    pub page: PageOptions,
    pub output: OutputConfig,
}

/// Where the rendered page is written
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub dir: PathBuf,
    pub file_name: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("dist"),
            file_name: "index.html".into(),
        }
    }
}

impl ExportConfig {
    /// Load `forecast-landing.toml` from `root` if present.
    /// A missing file gives the defaults; an unreadable or invalid one is
    /// warned about and also gives the defaults.
    pub fn load(root: &Path) -> Self {
        let path = root.join(CONFIG_FILE_NAME);
        if !path.exists() {
            return Self::default();
        }

        match Self::load_from_path(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring config");
                Self::default()
            }
        }
    }

    /// Load config from a specific path. Any failure is an error.
    pub fn load_from_path(path: &Path) -> Result<Self, ExportError> {
        let content = std::fs::read_to_string(path).map_err(|source| ExportError::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| ExportError::ParseConfig {
            path: path.to_path_buf(),
            source,
        })
    }
}
