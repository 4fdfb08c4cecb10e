//! Reference enumeration abstraction
//!
//! This module provides a trait-based abstraction over reference discovery,
//! allowing for multiple implementations including real git repositories and
//! mock implementations for testing.
//!
//! The primary abstraction is the [RefSource] trait. The concrete
//! implementations include:
//!
//! - [repository::Git2RefSource]: a real implementation using the `git2` crate
//! - [mock::MockRefSource]: a mock implementation for testing
//!
//! Most code should depend on the [RefSource] trait rather than concrete
//! implementations to enable easy testing and flexibility.

pub mod mock;
pub mod repository;

pub use mock::MockRefSource;
pub use repository::Git2RefSource;

use crate::domain::Reference;
use crate::error::Result;

/// Common reference enumeration trait
///
/// A source produces the candidate references the filter decides over. Plain
/// git repositories report branches and tags; change requests exist only on
/// hosting platforms, so they come from host-aware sources (or mocks).
pub trait RefSource {
    /// List every candidate reference the source knows about
    fn references(&self) -> Result<Vec<Reference>>;
}
