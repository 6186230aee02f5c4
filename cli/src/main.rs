//! News feed renderer
//!
//! Loads the feed document, decides which view the page wants and prints
//! the rendered page containers. Configuration comes from the environment
//! (`NEWS_FEED_SOURCE`, `NEWS_LATEST_COUNT`, `NEWS_LATEST_CONTAINER`, or a
//! `.env` file) and can be overridden on the command line.

mod args;
mod render;

use anyhow::Result;
use clap::Parser;
use newsfeed_core::SourceConfig;
use tracing_subscriber::EnvFilter;

use args::Args;

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr; stdout carries the rendered page
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = args.apply(SourceConfig::from_env()?);

    let Some(page_type) = args.page_type() else {
        tracing::info!("Page {:?} has no news view; nothing to render", args.page);
        return Ok(());
    };

    tracing::info!("Rendering {} view from {}", page_type, config.source);
    let page = render::render_page(&config, page_type, &args.tabs).await?;
    let html = page.to_html();

    match &args.output {
        Some(path) => {
            tokio::fs::write(path, html).await?;
            tracing::info!("Wrote {}", path.display());
        }
        None => print!("{}", html),
    }

    Ok(())
}
