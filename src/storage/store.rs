//! The key-value store seam.

use crate::storage::StorageError;

/// A string-keyed, string-valued durable store.
///
/// Implementations report failures; deciding whether a failure matters is
/// left to [`PersistenceAdapter`](crate::PersistenceAdapter).
pub trait KeyValueStore: std::fmt::Debug {
    /// Reads the value under `key`, or `None` if nothing is stored.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Deletes `key`. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}
