use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Parser;
use portfolio_site::webp::{convert_tree, ConvertOptions};
use tracing_subscriber::EnvFilter;

/// Convert every PNG/JPEG under a directory into a WebP sibling.
#[derive(Parser, Debug)]
struct Cli {
    /// Directory to walk
    #[arg(long, default_value = "public/images")]
    root: PathBuf,
    /// Reconvert even when the WebP is newer than its source
    #[arg(long)]
    force: bool,
    /// List the work without writing files
    #[arg(long)]
    dry_run: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_target(false)
        .init();

    let cli = Cli::parse();
    if !cli.root.is_dir() {
        bail!("{} is not a directory", cli.root.display());
    }

    tracing::info!("converting images under {} to WebP", cli.root.display());
    let report = convert_tree(
        &cli.root,
        &ConvertOptions {
            force: cli.force,
            dry_run: cli.dry_run,
        },
    );
    tracing::info!(
        converted = report.converted(),
        pending = report.pending(),
        skipped = report.skipped(),
        failed = report.failed(),
        "done"
    );
    Ok(())
}
