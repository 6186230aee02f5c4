//! Application layer
//!
//! The controller coordinating the feed source, the renderer and the page.

pub mod feed_controller;

pub use feed_controller::FeedController;
