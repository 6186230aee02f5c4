//! HTTP feed source implementation

use async_trait::async_trait;
use reqwest::Client;

use crate::domain::entities::FeedDocument;
use crate::domain::ports::FeedSource;
use crate::error::FeedError;

/// Fetches the feed document from a URL
pub struct HttpFeedSource {
    http: Client,
    url: String,
}

impl HttpFeedSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            url: url.into(),
        }
    }

    /// Use a preconfigured client (timeouts, proxy settings)
    pub fn with_client(http: Client, url: impl Into<String>) -> Self {
        Self {
            http,
            url: url.into(),
        }
    }

    async fn handle_response(&self, response: reqwest::Response) -> Result<FeedDocument, FeedError> {
        let status = response.status();

        if !status.is_success() {
            return Err(FeedError::Status {
                status: status.as_u16(),
                url: self.url.clone(),
            });
        }

        let body = response.text().await?;
        Ok(FeedDocument::from_json(&body)?)
    }
}

#[async_trait]
impl FeedSource for HttpFeedSource {
    async fn fetch(&self) -> Result<FeedDocument, FeedError> {
        tracing::debug!("Fetching feed from {}", self.url);
        let response = self.http.get(&self.url).send().await?;
        self.handle_response(response).await
    }

    fn location(&self) -> String {
        self.url.clone()
    }
}
