//! Source selection
//!
//! Picks the HTTP or file adapter from a location string.

use async_trait::async_trait;

use super::file::FileFeedSource;
use super::http::HttpFeedSource;
use crate::domain::entities::FeedDocument;
use crate::domain::ports::FeedSource;
use crate::error::FeedError;

/// Either of the concrete feed sources
pub enum AnyFeedSource {
    Http(HttpFeedSource),
    File(FileFeedSource),
}

impl AnyFeedSource {
    /// `http://` and `https://` locations are fetched, anything else is a path
    pub fn from_location(location: &str) -> Self {
        let lower = location.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            AnyFeedSource::Http(HttpFeedSource::new(location))
        } else {
            AnyFeedSource::File(FileFeedSource::new(location))
        }
    }
}

#[async_trait]
impl FeedSource for AnyFeedSource {
    async fn fetch(&self) -> Result<FeedDocument, FeedError> {
        match self {
            AnyFeedSource::Http(source) => source.fetch().await,
            AnyFeedSource::File(source) => source.fetch().await,
        }
    }

    fn location(&self) -> String {
        match self {
            AnyFeedSource::Http(source) => source.location(),
            AnyFeedSource::File(source) => source.location(),
        }
    }
}
