//! Error types for the news feed core
//!
//! - `FeedError`: failures while fetching or decoding the feed document
//! - `ConfigError`: invalid configuration values

use thiserror::Error;

/// Feed load errors
///
/// These never escape `FeedController::load`; they are logged there and
/// reported to the caller as a boolean.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Unexpected status {status} fetching {url}")]
    Status { status: u16, url: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed feed document: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },

    #[error("Unknown page type: {0}")]
    UnknownPageType(String),
}
