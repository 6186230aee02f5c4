//! Local file feed source implementation

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::domain::entities::FeedDocument;
use crate::domain::ports::FeedSource;
use crate::error::FeedError;

/// Reads the feed document from the local filesystem
pub struct FileFeedSource {
    path: PathBuf,
}

impl FileFeedSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl FeedSource for FileFeedSource {
    async fn fetch(&self) -> Result<FeedDocument, FeedError> {
        tracing::debug!("Reading feed from {}", self.path.display());
        let contents = tokio::fs::read_to_string(&self.path).await?;
        Ok(FeedDocument::from_json(&contents)?)
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
