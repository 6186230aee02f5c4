//! Page rendering
//!
//! Builds the page for the chosen view, runs the controller against it
//! and replays tab activations.

use std::sync::Arc;

use anyhow::{bail, Result};
use newsfeed_core::{
    AnyFeedSource, FeedController, FeedSource, PageDocument, PageEvent, PageType, RenderConfig,
    SourceConfig, ALL_CATEGORIES,
};

/// Empty page with the containers the view writes to
pub fn page_for(page_type: PageType, render: &RenderConfig) -> PageDocument {
    match page_type {
        PageType::News => PageDocument::new()
            .with_container(render.tabs_container.as_str())
            .with_container(render.list_container.as_str()),
        PageType::Top => PageDocument::new().with_container(render.latest_container.as_str()),
    }
}

/// Render the feed for `page_type` and return the page
pub async fn render_page(
    config: &SourceConfig,
    page_type: PageType,
    tabs: &[String],
) -> Result<PageDocument> {
    let source = Arc::new(AnyFeedSource::from_location(&config.source));
    run(source, config, page_type, tabs).await
}

async fn run<S: FeedSource>(
    source: Arc<S>,
    config: &SourceConfig,
    page_type: PageType,
    tabs: &[String],
) -> Result<PageDocument> {
    let location = source.location();
    let render = RenderConfig::default().with_source(config);
    let mut page = page_for(page_type, &render);
    let mut controller = FeedController::new(source, render);

    if !controller
        .handle_event(PageEvent::Ready(page_type), &mut page)
        .await
    {
        bail!("Failed to load news feed from {}", location);
    }

    for tab in tabs {
        if page_type != PageType::News {
            tracing::warn!("Ignoring --tab {}: the {} view has no tabs", tab, page_type);
            continue;
        }
        if !controller.categories().contains(tab) && tab != ALL_CATEGORIES {
            tracing::warn!("Unknown category {}; the list will be empty", tab);
        }
        controller
            .handle_event(PageEvent::TabActivated(tab.clone()), &mut page)
            .await;
    }

    Ok(page)
}
