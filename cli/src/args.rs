//! Command-line arguments

use std::path::PathBuf;

use clap::Parser;
use newsfeed_core::{PageType, SourceConfig};

#[derive(Parser, Debug)]
#[command(name = "newsfeed")]
#[command(about = "Render a static news feed into page containers", long_about = None)]
pub struct Args {
    /// Feed document: a file path or an http(s) URL
    ///
    /// Defaults to NEWS_FEED_SOURCE, then `news.json`.
    #[arg(short, long, value_name = "PATH|URL")]
    pub source: Option<String>,

    /// Page path used to pick the view (`/news.html`, `/`, `/index.html`)
    #[arg(short, long, value_name = "PATH")]
    pub page: Option<String>,

    /// View to render, overrides --page
    #[arg(short, long, value_name = "news|top")]
    pub mode: Option<PageType>,

    /// Category tabs to activate after the page is ready, in order
    #[arg(short, long = "tab", value_name = "CATEGORY")]
    pub tabs: Vec<String>,

    /// Entries in the latest view (defaults to NEWS_LATEST_COUNT, then 6)
    #[arg(long, value_name = "N")]
    pub latest_count: Option<usize>,

    /// Container id for the latest view (defaults to NEWS_LATEST_CONTAINER)
    #[arg(long, value_name = "ID")]
    pub latest_container: Option<String>,

    /// Write the rendered page here instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl Args {
    /// Which view to build; `None` means the page gets no feed
    pub fn page_type(&self) -> Option<PageType> {
        match (self.mode, &self.page) {
            (Some(mode), _) => Some(mode),
            (None, Some(path)) => PageType::from_path(path),
            (None, None) => Some(PageType::News),
        }
    }

    /// Layer explicit arguments over the environment config
    pub fn apply(&self, mut config: SourceConfig) -> SourceConfig {
        if let Some(source) = &self.source {
            config.source = source.clone();
        }
        if let Some(count) = self.latest_count {
            config.latest_count = count;
        }
        if let Some(container) = &self.latest_container {
            config.latest_container = container.clone();
        }
        config
    }
}
