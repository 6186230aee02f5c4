//! Feed controller
//!
//! Owns the loaded feed and the current category, and renders views of
//! it into a page. One controller per page; the page hands it events.

use std::sync::Arc;

use crate::config::RenderConfig;
use crate::domain::entities::{
    sort_newest_first, CategoryMapping, CategorySelector, NewsEntry, PageEvent, PageType,
};
use crate::domain::ports::{FeedSource, RenderTarget};
use crate::feed;

/// Controller for one page's news feed
pub struct FeedController<S>
where
    S: FeedSource,
{
    source: Arc<S>,
    config: RenderConfig,
    /// Sorted newest first
    entries: Vec<NewsEntry>,
    categories: CategoryMapping,
    selected: CategorySelector,
    loaded: bool,
}

impl<S> FeedController<S>
where
    S: FeedSource,
{
    pub fn new(source: Arc<S>, config: RenderConfig) -> Self {
        Self {
            source,
            config,
            entries: Vec::new(),
            categories: CategoryMapping::new(),
            selected: CategorySelector::All,
            loaded: false,
        }
    }

    /// Load the feed document and replace the current state.
    ///
    /// Failures are logged and reported as `false`; the previous entries
    /// and categories are kept.
    pub async fn load(&mut self) -> bool {
        let document = match self.source.fetch().await {
            Ok(document) => document,
            Err(e) => {
                tracing::error!("Failed to load news feed from {}: {}", self.source.location(), e);
                return false;
            }
        };

        let mut entries = document.news;
        let invalid = sort_newest_first(&mut entries);
        if invalid > 0 {
            tracing::warn!("{} news entries have unparseable dates; listed last", invalid);
        }

        tracing::info!(
            "Loaded {} news entries in {} categories from {}",
            entries.len(),
            document.categories.len(),
            self.source.location()
        );

        self.entries = entries;
        self.categories = document.categories;
        self.loaded = true;
        true
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn entries(&self) -> &[NewsEntry] {
        &self.entries
    }

    pub fn categories(&self) -> &CategoryMapping {
        &self.categories
    }

    pub fn selected(&self) -> &CategorySelector {
        &self.selected
    }

    /// Select a category and return the entries it shows.
    ///
    /// Unknown keys are accepted and select nothing.
    pub fn filter_by_category(&mut self, category: impl Into<CategorySelector>) -> Vec<&NewsEntry> {
        self.selected = category.into();
        self.filtered()
    }

    fn filtered(&self) -> Vec<&NewsEntry> {
        self.entries
            .iter()
            .filter(|entry| self.selected.matches(&entry.category))
            .collect()
    }

    /// The `count` newest entries, regardless of the selected category
    pub fn latest_news(&self, count: usize) -> &[NewsEntry] {
        &self.entries[..count.min(self.entries.len())]
    }

    pub fn category_display_name<'a>(&'a self, category: &'a str) -> &'a str {
        feed::category_label(&self.categories, category)
    }

    pub fn category_class(&self, category: &str) -> &str {
        self.config.category_class(category)
    }

    pub fn render_entry(&self, entry: &NewsEntry) -> String {
        feed::render_entry(entry, &self.categories, &self.config)
    }

    pub fn render_tabs(&self) -> String {
        feed::render_tabs(&self.categories, &self.selected)
    }

    /// Select a category, then redraw the list and the tabs
    pub fn switch_category<T>(&mut self, category: impl Into<CategorySelector>, target: &mut T)
    where
        T: RenderTarget + ?Sized,
    {
        self.selected = category.into();
        tracing::debug!("Switched news category to {}", self.selected);

        self.render_list(target);
        let tabs = self.render_tabs();
        target.set_markup(&self.config.tabs_container, tabs);
    }

    /// Render the selected entries into the list container.
    ///
    /// Returns `false` when the page has no list container.
    pub fn render_list<T>(&self, target: &mut T) -> bool
    where
        T: RenderTarget + ?Sized,
    {
        if !target.has_container(&self.config.list_container) {
            tracing::debug!("No #{} container; skipping list", self.config.list_container);
            return false;
        }

        let entries = self.filtered();
        let markup = feed::render_entry_list(&entries, &self.categories, &self.config);
        target.set_markup(&self.config.list_container, markup)
    }

    /// Render the `count` newest entries, simplified, into `container_id`.
    ///
    /// Returns `false` when the page has no such container.
    pub fn render_latest<T>(&self, target: &mut T, container_id: &str, count: usize) -> bool
    where
        T: RenderTarget + ?Sized,
    {
        if !target.has_container(container_id) {
            tracing::debug!("No #{} container; skipping latest news", container_id);
            return false;
        }

        let markup = feed::render_latest(self.latest_news(count), &self.categories, &self.config);
        target.set_markup(container_id, markup)
    }

    /// Load the feed and build the view for `page_type`.
    ///
    /// Nothing is rendered if loading fails.
    pub async fn init<T>(&mut self, page_type: PageType, target: &mut T) -> bool
    where
        T: RenderTarget + ?Sized,
    {
        if !self.load().await {
            return false;
        }

        match page_type {
            PageType::News => {
                let tabs = self.render_tabs();
                target.set_markup(&self.config.tabs_container, tabs);
                self.render_list(target);
            }
            PageType::Top => {
                self.render_latest(
                    target,
                    &self.config.latest_container,
                    self.config.latest_count,
                );
            }
        }

        true
    }

    /// Dispatch a page event. Returns whether it was acted on.
    pub async fn handle_event<T>(&mut self, event: PageEvent, target: &mut T) -> bool
    where
        T: RenderTarget + ?Sized,
    {
        match event {
            PageEvent::Ready(page_type) => self.init(page_type, target).await,
            PageEvent::TabActivated(category) => {
                if !self.loaded {
                    tracing::debug!("Ignoring tab {} before the feed loaded", category);
                    return false;
                }
                self.switch_category(category, target);
                true
            }
        }
    }
}
