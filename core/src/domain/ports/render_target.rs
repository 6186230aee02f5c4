//! Render target port trait
//!
//! Anything that can accept markup for a named container. A target that
//! does not have the container simply ignores the write.

/// Port trait for the page the feed is rendered into
pub trait RenderTarget {
    /// Whether the page has a container with this id
    fn has_container(&self, id: &str) -> bool;

    /// Replace the markup of a container.
    ///
    /// Returns `false` and leaves the page untouched when the container
    /// does not exist.
    fn set_markup(&mut self, id: &str, markup: String) -> bool;
}
