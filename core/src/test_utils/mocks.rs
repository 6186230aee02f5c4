//! Mock implementations of port traits

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use crate::domain::entities::FeedDocument;
use crate::domain::ports::FeedSource;
use crate::error::FeedError;

// ============================================================================
// Mock Feed Source
// ============================================================================

/// Returns a configured document, or fails when none is set
#[derive(Default)]
pub struct MockFeedSource {
    document: Arc<RwLock<Option<FeedDocument>>>,
    fetches: AtomicUsize,
}

impl MockFeedSource {
    /// A source whose fetches all fail
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(self, document: FeedDocument) -> Self {
        self.set_document(Some(document));
        self
    }

    /// Change what subsequent fetches return; `None` makes them fail
    pub fn set_document(&self, document: Option<FeedDocument>) {
        *self.document.write().unwrap() = document;
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FeedSource for MockFeedSource {
    async fn fetch(&self) -> Result<FeedDocument, FeedError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.document
            .read()
            .unwrap()
            .clone()
            .ok_or_else(|| FeedError::Status {
                status: 503,
                url: self.location(),
            })
    }

    fn location(&self) -> String {
        "mock://news.json".to_string()
    }
}
