//! Configuration
//!
//! `SourceConfig` says where the feed lives and how the latest view is
//! sized; `RenderConfig` holds the tables and labels the renderer uses.

use std::collections::HashMap;
use std::env;

use crate::error::ConfigError;

/// Number of entries the latest view shows when nothing else is configured
pub const DEFAULT_LATEST_COUNT: usize = 6;

/// Feed file location relative to the page
pub const DEFAULT_FEED_SOURCE: &str = "news.json";

pub const DEFAULT_TABS_CONTAINER: &str = "news-tabs-container";
pub const DEFAULT_LIST_CONTAINER: &str = "news-list";
pub const DEFAULT_LATEST_CONTAINER: &str = "latest-news";

const DEFAULT_GRADIENT: &str = "linear-gradient(135deg, #667eea 0%, #764ba2 100%)";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceConfig {
    /// File path or http(s) URL of the feed document
    pub source: String,
    pub latest_count: usize,
    pub latest_container: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            source: DEFAULT_FEED_SOURCE.to_string(),
            latest_count: DEFAULT_LATEST_COUNT,
            latest_container: DEFAULT_LATEST_CONTAINER.to_string(),
        }
    }
}

impl SourceConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let latest_count = match env::var("NEWS_LATEST_COUNT") {
            Ok(value) => value.parse().map_err(|_| ConfigError::InvalidValue {
                key: "NEWS_LATEST_COUNT".to_string(),
                value,
            })?,
            Err(_) => DEFAULT_LATEST_COUNT,
        };

        Ok(Self {
            source: env::var("NEWS_FEED_SOURCE")
                .unwrap_or_else(|_| DEFAULT_FEED_SOURCE.to_string()),
            latest_count,
            latest_container: env::var("NEWS_LATEST_CONTAINER")
                .unwrap_or_else(|_| DEFAULT_LATEST_CONTAINER.to_string()),
        })
    }
}

/// Tables and labels used when rendering markup
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Placeholder background per category key
    pub gradients: HashMap<String, String>,
    pub default_gradient: String,
    /// Badge CSS class per category key
    pub category_classes: HashMap<String, String>,
    pub new_badge_label: String,
    pub details_label: String,
    pub empty_message: String,
    pub tabs_container: String,
    pub list_container: String,
    pub latest_container: String,
    pub latest_count: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        let gradients = [
            ("press", "linear-gradient(135deg, #3b82f6 0%, #8b5cf6 100%)"),
            ("conference", "linear-gradient(135deg, #059669 0%, #0891b2 100%)"),
            ("award", "linear-gradient(135deg, #f59e0b 0%, #ef4444 100%)"),
            ("notice", "linear-gradient(135deg, #06b6d4 0%, #3b82f6 100%)"),
        ];
        let classes = ["notice", "conference", "award", "press"];

        Self {
            gradients: gradients
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            default_gradient: DEFAULT_GRADIENT.to_string(),
            category_classes: classes
                .iter()
                .map(|k| (k.to_string(), format!("category-{}", k)))
                .collect(),
            new_badge_label: "NEW".to_string(),
            details_label: "View details".to_string(),
            empty_message: "No news available.".to_string(),
            tabs_container: DEFAULT_TABS_CONTAINER.to_string(),
            list_container: DEFAULT_LIST_CONTAINER.to_string(),
            latest_container: DEFAULT_LATEST_CONTAINER.to_string(),
            latest_count: DEFAULT_LATEST_COUNT,
        }
    }
}

impl RenderConfig {
    /// Apply the latest-view settings from a source config
    pub fn with_source(mut self, source: &SourceConfig) -> Self {
        self.latest_container = source.latest_container.clone();
        self.latest_count = source.latest_count;
        self
    }

    pub fn gradient(&self, category: &str) -> &str {
        self.gradients
            .get(category)
            .map(String::as_str)
            .unwrap_or(&self.default_gradient)
    }

    /// Badge class for a category, empty when none is configured
    pub fn category_class(&self, category: &str) -> &str {
        self.category_classes
            .get(category)
            .map(String::as_str)
            .unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_gradients() {
        let config = RenderConfig::default();

        assert_eq!(
            config.gradient("award"),
            "linear-gradient(135deg, #f59e0b 0%, #ef4444 100%)"
        );
        assert_eq!(config.gradient("misc"), DEFAULT_GRADIENT);
    }

    #[test]
    fn default_category_classes() {
        let config = RenderConfig::default();

        assert_eq!(config.category_class("press"), "category-press");
        assert_eq!(config.category_class("notice"), "category-notice");
        assert_eq!(config.category_class("misc"), "");
    }

    #[test]
    fn with_source_overrides_latest_view() {
        let source = SourceConfig {
            source: "feed.json".to_string(),
            latest_count: 3,
            latest_container: "home-news".to_string(),
        };

        let config = RenderConfig::default().with_source(&source);

        assert_eq!(config.latest_count, 3);
        assert_eq!(config.latest_container, "home-news");
        assert_eq!(config.list_container, DEFAULT_LIST_CONTAINER);
    }

    /// Env vars are process-wide, so every `from_env` case lives in one test
    #[test]
    fn source_config_from_env() {
        const KEYS: [&str; 3] = [
            "NEWS_FEED_SOURCE",
            "NEWS_LATEST_COUNT",
            "NEWS_LATEST_CONTAINER",
        ];
        for key in KEYS {
            env::remove_var(key);
        }

        let config = SourceConfig::from_env().unwrap();
        assert_eq!(config, SourceConfig::default());

        env::set_var("NEWS_FEED_SOURCE", "https://example.com/news.json");
        env::set_var("NEWS_LATEST_COUNT", "3");
        env::set_var("NEWS_LATEST_CONTAINER", "home-news");

        let config = SourceConfig::from_env().unwrap();
        assert_eq!(config.source, "https://example.com/news.json");
        assert_eq!(config.latest_count, 3);
        assert_eq!(config.latest_container, "home-news");

        env::set_var("NEWS_LATEST_COUNT", "six");

        let result = SourceConfig::from_env();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue { ref key, ref value })
                if key == "NEWS_LATEST_COUNT" && value == "six"
        ));

        for key in KEYS {
            env::remove_var(key);
        }
    }

    #[test]
    fn source_config_defaults() {
        let config = SourceConfig::default();

        assert_eq!(config.source, "news.json");
        assert_eq!(config.latest_count, 6);
        assert_eq!(config.latest_container, "latest-news");
    }
}
