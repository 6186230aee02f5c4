//! HTTP adapter
//!
//! Fetches the feed document over HTTP.

pub mod client;

pub use client::HttpFeedSource;
