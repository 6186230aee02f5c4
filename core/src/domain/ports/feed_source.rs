//! Feed source port trait
//!
//! Defines where the feed document comes from.

use async_trait::async_trait;

use crate::domain::entities::FeedDocument;
use crate::error::FeedError;

/// Port trait for fetching the feed document
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Fetch and decode the feed document
    async fn fetch(&self) -> Result<FeedDocument, FeedError>;

    /// Human-readable location, used in log messages
    fn location(&self) -> String;
}
