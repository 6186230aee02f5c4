//! Feed document
//!
//! The JSON file the feed is loaded from.

use serde::{Deserialize, Serialize};

use super::category::CategoryMapping;
use super::news_entry::NewsEntry;

/// Top-level shape of the feed file: `{ "news": [...], "categories": {...} }`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedDocument {
    pub news: Vec<NewsEntry>,
    pub categories: CategoryMapping,
}

impl FeedDocument {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
