//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//! The mocks are plain structs rather than generated ones so tests can
//! swap the document a source returns between loads.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
