//! Error types for persistence and reorder validation.
//!
//! Store operations themselves never fail: these errors are logged,
//! recorded on the store, or returned from explicit validation calls.

use thiserror::Error;

use crate::domain::ItemId;

/// Result alias for storage port and record operations
pub type PersistResult<T> = Result<T, PersistError>;

/// Failures while reading or writing the persisted record
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("storage read failed: {0}")]
    Read(String),

    #[error("storage write failed: {0}")]
    Write(String),

    #[error("failed to encode list state: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("failed to decode persisted record: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("unsupported record version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// A reorder input that is not a permutation of the stored items
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReorderError {
    #[error("reorder has {found} items, store holds {expected}")]
    LengthMismatch { expected: usize, found: usize },

    #[error("item {0} appears more than once in reorder input")]
    Duplicate(ItemId),

    #[error("item {0} is not in the store")]
    Unknown(ItemId),
}
