//! Best-effort persistence over an injected key-value store.

use derive_more::{Display, Error};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info, instrument, warn};

use crate::storage::KeyValueStore;

/// Store key for the player's name.
pub const PLAYER_NAME_KEY: &str = "sustainability-bingo-player";

/// Why a persistence call could not be honoured.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum PersistenceErrorKind {
    /// The stored value could not be decoded into the expected shape.
    #[display("malformed persisted data: {_0}")]
    MalformedPersistedData(String),
    /// The store rejected the read or write.
    #[display("storage unavailable: {_0}")]
    StorageUnavailable(String),
    /// The value could not be encoded as JSON.
    #[display("could not encode value: {_0}")]
    EncodeFailed(String),
}

/// Persistence error with the offending key and location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Persistence error for '{}': {} at {}:{}", key, kind, file, line)]
pub struct PersistenceError {
    /// What went wrong.
    pub kind: PersistenceErrorKind,
    /// Store key involved.
    pub key: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl PersistenceError {
    /// Creates a new persistence error with caller location tracking.
    #[track_caller]
    #[instrument(skip(key), fields(key = %key.as_ref()))]
    pub fn new(kind: PersistenceErrorKind, key: impl AsRef<str>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            key: key.as_ref().to_string(),
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Whether the stored value was unreadable.
    pub fn is_malformed(&self) -> bool {
        matches!(self.kind, PersistenceErrorKind::MalformedPersistedData(_))
    }
}

/// Typed access to a [`KeyValueStore`].
///
/// Structured values are stored as JSON; the player name is stored as plain
/// text. Writes through [`save`](Self::save) and friends never fail from the
/// caller's point of view: a rejected write is logged and the session carries
/// on with in-memory state.
#[derive(Debug)]
pub struct PersistenceAdapter {
    store: Box<dyn KeyValueStore>,
}

impl PersistenceAdapter {
    /// Wraps a store.
    #[instrument(skip(store))]
    pub fn new(store: impl KeyValueStore + 'static) -> Self {
        info!(store = ?store, "Creating PersistenceAdapter");
        Self {
            store: Box::new(store),
        }
    }

    /// Returns the underlying store.
    pub fn store(&self) -> &dyn KeyValueStore {
        self.store.as_ref()
    }

    /// Serializes `value` as JSON under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceErrorKind::EncodeFailed`] if `value` cannot be
    /// serialized, or [`PersistenceErrorKind::StorageUnavailable`] if the
    /// store rejects the write. Nothing is written when encoding fails.
    #[instrument(skip(self, value))]
    pub fn try_save<T: Serialize + ?Sized>(
        &self,
        key: &str,
        value: &T,
    ) -> Result<(), PersistenceError> {
        let json = serde_json::to_string(value).map_err(|e| {
            PersistenceError::new(PersistenceErrorKind::EncodeFailed(e.to_string()), key)
        })?;
        self.store.set(key, &json).map_err(|e| {
            PersistenceError::new(PersistenceErrorKind::StorageUnavailable(e.message), key)
        })?;
        debug!(bytes = json.len(), "Saved value");
        Ok(())
    }

    /// Best-effort [`try_save`](Self::try_save).
    #[instrument(skip(self, value))]
    pub fn save<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        if let Err(e) = self.try_save(key, value) {
            warn!(error = %e, "Save failed, continuing with in-memory state");
        }
    }

    /// Loads and decodes the JSON value under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceErrorKind::StorageUnavailable`] if the store
    /// cannot be read, or [`PersistenceErrorKind::MalformedPersistedData`]
    /// if the stored text does not decode into `T`.
    #[instrument(skip(self))]
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, PersistenceError> {
        let Some(raw) = self.load_raw(key)? else {
            debug!("Key absent");
            return Ok(None);
        };
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|e| {
                PersistenceError::new(PersistenceErrorKind::MalformedPersistedData(e.to_string()), key)
            })
    }

    /// Stores `text` verbatim under `key`.
    #[instrument(skip(self, text))]
    pub fn save_text(&self, key: &str, text: &str) {
        if let Err(e) = self.store.set(key, text) {
            warn!(error = %e, "Save failed, continuing with in-memory state");
        }
    }

    /// Reads the text under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceErrorKind::StorageUnavailable`] if the store
    /// cannot be read.
    #[instrument(skip(self))]
    pub fn load_text(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        self.load_raw(key)
    }

    /// Best-effort delete of `key`.
    #[instrument(skip(self))]
    pub fn remove(&self, key: &str) {
        match self.store.remove(key) {
            Ok(()) => debug!("Removed key"),
            Err(e) => warn!(error = %e, "Remove failed"),
        }
    }

    #[instrument(skip(self))]
    fn load_raw(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        self.store.get(key).map_err(|e| {
            PersistenceError::new(PersistenceErrorKind::StorageUnavailable(e.message), key)
        })
    }
}
