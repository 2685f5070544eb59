//! Record persistence for the storefront widget.
//!
//! Stores local data only, in four collections mirrored to storage on every
//! mutation:
//!
//! - `customers` - one record per known customer email
//! - `subscriptions` - recurring deliveries, owned by a customer id
//! - `orders` - one-time cart checkouts
//! - `contacts` - contact form submissions
//!
//! All collections load in full when the store opens and are rewritten in
//! full on every mutating operation. There are no partial writes and no
//! transactions; access is sequential within a single control flow.

use thiserror::Error;

use crate::storage::StorageError;

mod ids;
mod records;

pub use ids::{IdSource, RandomIds, SequentialIds};
pub use records::RecordStore;

/// Errors raised by record store operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The storage backend failed.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// A collection could not be serialized for persistence.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Data in storage is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),
}
