//! Core type definitions for Scribe.
//!
//! This crate defines the fundamental, model-agnostic pieces shared by
//! the document model:
//! - [`EntityMutability`] — how an entity's text span may be edited
//! - [`KeyGenerator`] / [`RandomKeyGenerator`] — block-key allocation
//! - [`TextSanitizer`] / [`FeatureFlags`] — injectable capabilities
//!   consumed during plain-text import
//!
//! All document value types (blocks, selections, snapshots) belong in
//! `scribe-model` and `scribe-content`, not here.

mod capabilities;
mod keys;
mod mutability;

pub use capabilities::{CarriageReturnSanitizer, FeatureFlags, StaticFlags, TextSanitizer};
pub use keys::{KeyGenerator, RandomKeyGenerator};
pub use mutability::EntityMutability;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in document-model operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An entity key was queried that no registry in the snapshot
    /// chain ever issued. Always a caller bug — a dangling or
    /// fabricated key — never an expected miss.
    #[error("unknown entity key: {0}")]
    UnknownEntityKey(String),
}
