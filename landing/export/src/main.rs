// forecast-export: prerender the landing page into a static bundle.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};

use forecast_export::{ExportConfig, ExportPlan, export};

#[derive(Parser, Debug)]
#[command(name = "forecast-export")]
#[command(about = "Prerender the forecasting landing page to static HTML")]
#[command(version)]
struct Args {
    /// Output directory (default: `output.dir` from config, else `dist`)
    #[arg(long, short)]
    out: Option<PathBuf>,

    /// Config file (default: ./forecast-landing.toml if present)
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Directory of public assets copied next to the page
    #[arg(long)]
    assets: Option<PathBuf>,

    /// Override the document title
    #[arg(long)]
    title: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn run() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr; stdout only carries the written path.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    info!("forecast-export v{}", env!("CARGO_PKG_VERSION"));

    let config = match &args.config {
        Some(path) => ExportConfig::load_from_path(path)
            .with_context(|| format!("loading --config {}", path.display()))?,
        None => {
            let cwd = std::env::current_dir().context("resolving working directory")?;
            ExportConfig::load(&cwd)
        }
    };
    debug!(?config, "resolved config");

    let mut page = config.page;
    if let Some(title) = args.title {
        page.title = title;
    }

    let plan = ExportPlan {
        out_dir: args.out.unwrap_or(config.output.dir),
        file_name: config.output.file_name,
        page,
        assets: args.assets,
    };

    let report = export(&plan).context("exporting landing page")?;
    info!(
        assets = report.copied_assets.len(),
        sample_present = report.sample_present,
        "export finished"
    );
    println!("{}", report.page.display());

    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[forecast-export] Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
