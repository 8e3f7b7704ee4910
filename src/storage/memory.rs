//! In-memory store for ephemeral sessions and tests.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use tracing::{debug, instrument};

use crate::storage::{KeyValueStore, StorageError};

#[derive(Debug, Default)]
struct Inner {
    entries: BTreeMap<String, String>,
    quota: Option<usize>,
    unavailable: bool,
}

/// A store that lives only as long as the process.
///
/// Clones share the same entries, so a test can keep a handle while the
/// service owns another. A byte quota and an unavailable switch let callers
/// exercise the full-storage and disabled-storage paths.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Rc<RefCell<Inner>>,
}

impl MemoryStore {
    /// Creates an empty, unlimited store.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that refuses writes once values total `bytes`.
    #[instrument]
    pub fn with_quota(bytes: usize) -> Self {
        let store = Self::default();
        store.inner.borrow_mut().quota = Some(bytes);
        store
    }

    /// Makes every operation fail (or succeed again).
    #[instrument(skip(self))]
    pub fn set_unavailable(&self, unavailable: bool) {
        self.inner.borrow_mut().unavailable = unavailable;
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.inner.borrow().entries.len()
    }

    /// Whether nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.inner.borrow().entries.is_empty()
    }

    /// Whether `key` holds a value.
    pub fn contains_key(&self, key: &str) -> bool {
        self.inner.borrow().entries.contains_key(key)
    }

    #[instrument(skip(inner))]
    fn check_available(inner: &Inner) -> Result<(), StorageError> {
        if inner.unavailable {
            return Err(StorageError::new("Storage is unavailable"));
        }
        Ok(())
    }
}

impl KeyValueStore for MemoryStore {
    #[instrument(skip(self))]
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let inner = self.inner.borrow();
        Self::check_available(&inner)?;
        Ok(inner.entries.get(key).cloned())
    }

    #[instrument(skip(self, value), fields(bytes = value.len()))]
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut inner = self.inner.borrow_mut();
        Self::check_available(&inner)?;
        if let Some(quota) = inner.quota {
            let others: usize = inner
                .entries
                .iter()
                .filter(|(k, _)| k.as_str() != key)
                .map(|(_, v)| v.len())
                .sum();
            if others + value.len() > quota {
                return Err(StorageError::new(format!(
                    "Quota of {} bytes exceeded writing '{}'",
                    quota, key
                )));
            }
        }
        inner.entries.insert(key.to_string(), value.to_string());
        debug!(keys = inner.entries.len(), "Stored key");
        Ok(())
    }

    #[instrument(skip(self))]
    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut inner = self.inner.borrow_mut();
        Self::check_available(&inner)?;
        inner.entries.remove(key);
        Ok(())
    }
}
