//! Writes the prerendered page and optional public assets to the output directory.

use std::path::{Path, PathBuf};

use forecast_landing::actions::SAMPLE_DATASET;
use forecast_landing::{PageOptions, render_page};
use walkdir::WalkDir;

use crate::error::ExportError;

/// Everything needed for one export run.
#[derive(Debug, Clone)]
pub struct ExportPlan {
    pub out_dir: PathBuf,
    pub file_name: String,
    pub page: PageOptions,
    /// Directory copied verbatim into `out_dir` (e.g. `public/` holding the
    /// sample CSV).
    pub assets: Option<PathBuf>,
}

/// What an export run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReport {
    pub page: PathBuf,
    pub copied_assets: Vec<PathBuf>,
    /// Whether the download button's CSV is present in the bundle.
    pub sample_present: bool,
}

/// Render the page into `plan.out_dir` and copy assets alongside it.
pub fn export(plan: &ExportPlan) -> Result<ExportReport, ExportError> {
    create_dir(&plan.out_dir)?;

    let copied_assets = match &plan.assets {
        Some(dir) => copy_assets(dir, &plan.out_dir)?,
        None => Vec::new(),
    };

    let page = plan.out_dir.join(&plan.file_name);
    let html = render_page(&plan.page);
    std::fs::write(&page, html).map_err(|source| ExportError::Write {
        path: page.clone(),
        source,
    })?;
    tracing::info!(path = %page.display(), "wrote page");

    let sample = plan.out_dir.join(SAMPLE_DATASET.asset_file());
    let sample_present = sample.is_file();
    if !sample_present {
        tracing::warn!(
            path = %sample.display(),
            "sample dataset missing from bundle; the download button will fail in the browser"
        );
    }

    Ok(ExportReport {
        page,
        copied_assets,
        sample_present,
    })
}

fn create_dir(path: &Path) -> Result<(), ExportError> {
    std::fs::create_dir_all(path).map_err(|source| ExportError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Mirror every file under `src` into `dest`, keeping relative paths.
///
/// `dest` must already exist. When `dest` lies inside `src` it is skipped
/// so the bundle is never copied into itself.
fn copy_assets(src: &Path, dest: &Path) -> Result<Vec<PathBuf>, ExportError> {
    let out_root = dest.canonicalize().map_err(|source| ExportError::Write {
        path: dest.to_path_buf(),
        source,
    })?;
    // A missing `src` is reported by the walk below.
    let src_root = src.canonicalize().unwrap_or_else(|_| src.to_path_buf());
    if src_root == out_root {
        return Err(ExportError::AssetsIsOutput {
            path: src.to_path_buf(),
        });
    }
    let nested_out = out_root.starts_with(&src_root).then_some(out_root);

    let mut copied = Vec::new();
    let walker = WalkDir::new(&src_root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| match &nested_out {
            Some(out) => !entry.path().starts_with(out),
            None => true,
        });

    for entry in walker {
        let entry = entry.map_err(|source| ExportError::WalkAssets {
            path: src.to_path_buf(),
            source,
        })?;
        let Ok(relative) = entry.path().strip_prefix(&src_root) else {
            continue;
        };
        let target = dest.join(relative);

        if entry.file_type().is_dir() {
            create_dir(&target)?;
            continue;
        }

        std::fs::copy(entry.path(), &target).map_err(|source| ExportError::Write {
            path: target.clone(),
            source,
        })?;
        tracing::debug!(from = %entry.path().display(), to = %target.display(), "copied asset");
        copied.push(target);
    }

    Ok(copied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn plan(out: &Path) -> ExportPlan {
        ExportPlan {
            out_dir: out.to_path_buf(),
            file_name: "index.html".into(),
            page: PageOptions::default(),
            assets: None,
        }
    }

    #[test]
    fn writes_page_without_assets() {
        let temp = TempDir::new().expect("temp dir");
        let out = temp.path().join("dist");

        let report = export(&plan(&out)).expect("export");

        assert_eq!(report.page, out.join("index.html"));
        assert!(report.copied_assets.is_empty());
        assert!(!report.sample_present);

        let html = std::fs::read_to_string(&report.page).expect("read page");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("How It Works"));
    }

    #[test]
    fn copies_assets_and_detects_sample() {
        let temp = TempDir::new().expect("temp dir");
        let public = temp.path().join("public");
        std::fs::create_dir_all(public.join("img")).expect("mkdir");
        std::fs::write(public.join(SAMPLE_DATASET.asset_file()), "YEAR,MONTH,NEW,USED\n").expect("csv");
        std::fs::write(public.join("img").join("logo.svg"), "<svg/>").expect("svg");

        let out = temp.path().join("dist");
        let report = export(&ExportPlan {
            assets: Some(public),
            ..plan(&out)
        })
        .expect("export");

        assert!(report.sample_present);
        assert_eq!(report.copied_assets.len(), 2);
        assert!(out.join("img").join("logo.svg").is_file());
    }

    #[test]
    fn missing_asset_dir_is_an_error() {
        let temp = TempDir::new().expect("temp dir");
        let err = export(&ExportPlan {
            assets: Some(temp.path().join("does-not-exist")),
            ..plan(&temp.path().join("dist"))
        })
        .expect_err("must fail");

        assert!(matches!(err, ExportError::WalkAssets { .. }));
    }

    #[test]
    fn assets_dir_equal_to_out_dir_is_rejected() {
        let temp = TempDir::new().expect("temp dir");
        let dist = temp.path().join("dist");
        std::fs::create_dir_all(&dist).expect("mkdir");
        let csv = dist.join(SAMPLE_DATASET.asset_file());
        std::fs::write(&csv, "YEAR,MONTH,NEW,USED\n2002,JAN,31106,49927\n").expect("csv");

        // Same directory, spelled differently.
        let err = export(&ExportPlan {
            assets: Some(dist.join("..").join("dist")),
            ..plan(&dist)
        })
        .expect_err("must fail");

        assert!(matches!(err, ExportError::AssetsIsOutput { .. }));
        assert_eq!(
            std::fs::read_to_string(&csv).expect("read csv"),
            "YEAR,MONTH,NEW,USED\n2002,JAN,31106,49927\n"
        );
        assert!(!dist.join("index.html").exists());
    }

    #[test]
    fn nested_out_dir_is_not_copied_into_itself() {
        let temp = TempDir::new().expect("temp dir");
        std::fs::write(temp.path().join(SAMPLE_DATASET.asset_file()), "YEAR,MONTH,NEW,USED\n").expect("csv");
        let out = temp.path().join("dist");

        // Second run sees the first run's bundle inside the asset directory.
        for _ in 0..2 {
            let report = export(&ExportPlan {
                assets: Some(temp.path().to_path_buf()),
                ..plan(&out)
            })
            .expect("export");

            assert!(report.sample_present);
            assert_eq!(report.copied_assets, vec![out.join(SAMPLE_DATASET.asset_file())]);
        }
        assert!(!out.join("dist").exists());
    }

    #[test]
    fn honors_custom_file_name() {
        let temp = TempDir::new().expect("temp dir");
        let report = export(&ExportPlan {
            file_name: "landing.html".into(),
            ..plan(temp.path())
        })
        .expect("export");

        assert_eq!(report.page, temp.path().join("landing.html"));
    }
}
