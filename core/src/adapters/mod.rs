//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod file;
pub mod http;
pub mod page;
pub mod source;

pub use file::FileFeedSource;
pub use http::HttpFeedSource;
pub use page::PageDocument;
pub use source::AnyFeedSource;
