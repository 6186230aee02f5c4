//! File adapter
//!
//! Reads the feed document from disk.

pub mod source;

pub use source::FileFeedSource;
