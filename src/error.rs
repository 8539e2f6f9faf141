//! Error definitions.

use thiserror::Error;

/// Failure conditions surfaced by [`crate::HashTable`].
///
/// `KeyNotFound` is recoverable and carries no logging side effect; the
/// operation that returned it performed no mutation.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableError {
    /// The queried key is absent: its bucket is empty or a full chain
    /// scan found no equal key.
    #[error("key not found")]
    KeyNotFound,
    /// A table cannot be created with zero buckets; the capacity is the
    /// hash modulus and must be at least 1.
    #[error("capacity must be at least 1")]
    InvalidCapacity,
}
