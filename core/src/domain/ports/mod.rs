//! Domain ports (traits)
//!
//! Port traits define interfaces that the controller requires.
//! Adapters provide concrete implementations of these traits.

pub mod feed_source;
pub mod render_target;

pub use feed_source::FeedSource;
pub use render_target::RenderTarget;
