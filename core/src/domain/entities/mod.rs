//! Domain entities
//!
//! Plain data describing the feed and the page it is rendered into.

pub mod category;
pub mod feed_document;
pub mod news_entry;
pub mod page;

pub use category::{CategoryMapping, CategorySelector, ALL_CATEGORIES};
pub use feed_document::FeedDocument;
pub use news_entry::{sort_newest_first, NewsEntry};
pub use page::{PageEvent, PageType};
