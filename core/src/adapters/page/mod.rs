//! Page adapter
//!
//! In-memory render target used by the CLI and tests.

pub mod document;

pub use document::PageDocument;
