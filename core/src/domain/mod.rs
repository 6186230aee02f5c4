//! Domain layer
//!
//! Contains the feed's data model with no knowledge of where it comes from.
//! - `entities`: Entries, categories, page identity
//! - `ports`: Trait definitions for the feed source and the render target

pub mod entities;
pub mod ports;
