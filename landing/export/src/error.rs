//! Errors raised while exporting the static bundle.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to read config {}", .path.display())]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}", .path.display())]
    ParseConfig {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to walk asset directory {}", .path.display())]
    WalkAssets {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("asset directory {} is the output directory", .path.display())]
    AssetsIsOutput { path: PathBuf },
}
