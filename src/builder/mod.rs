//! Builder API for configuring cube stores.
//!
//! This module provides a fluent builder that validates a supplied
//! starting state before any turn can run on it.

pub mod error;
pub mod store;

pub use error::BuildError;
pub use store::CubeStoreBuilder;
