//! `stanza` command-line entry point

mod cli;

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use stanza::{NullRenderer, Site, SiteConfig};
use tracing_subscriber::{filter::EnvFilter, layer::SubscriberExt, util::SubscriberInitExt, Layer};

use cli::{Cli, Commands};

/// Install the fmt subscriber: `RUST_LOG` if set, otherwise `info`, or
/// `debug` with `--verbose`.
fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_filter(filter),
        )
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Build { config, dry_run } => {
            let site_config = SiteConfig::load(&config)
                .with_context(|| format!("failed to load config {}", config.display()))?;

            let mut site = Site::new(site_config);
            if dry_run {
                site = site.with_renderer(Arc::new(NullRenderer));
            }

            let report = site.build().await.context("build failed")?;
            tracing::info!(
                templates = report.templates,
                content = report.content,
                pages = report.pages,
                dry_run,
                "done"
            );
        }
    }

    Ok(())
}
