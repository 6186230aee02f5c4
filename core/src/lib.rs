//! News feed core
//!
//! Loads a static news feed document, orders and filters its entries, and
//! renders them as HTML fragments into the containers of a page.
//! Uses a ports & adapters layout: the controller only knows the
//! `FeedSource` and `RenderTarget` traits.

pub mod adapters;
pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod feed;

#[cfg(test)]
mod test_utils;


pub use adapters::{AnyFeedSource, FileFeedSource, HttpFeedSource, PageDocument};
pub use app::FeedController;
pub use config::{RenderConfig, SourceConfig, DEFAULT_LATEST_COUNT};
pub use domain::entities::{
    CategoryMapping, CategorySelector, FeedDocument, NewsEntry, PageEvent, PageType,
    ALL_CATEGORIES,
};
pub use domain::ports::{FeedSource, RenderTarget};
pub use error::{ConfigError, FeedError};
