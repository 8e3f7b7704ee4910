//! Directory-backed store: one file per key.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, instrument, warn};

use crate::storage::{KeyValueStore, StorageError};

const EXTENSION: &str = "dat";

/// Stores each key as `<dir>/<key>.dat`.
///
/// Values are opaque text: grids are JSON, the player name is plain text.
/// The directory is created on first write. Writes go to a temporary file
/// that is renamed over the target, so a crash never leaves half a snapshot;
/// a failed write removes its temporary file.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Creates a store rooted at `dir`.
    #[instrument(skip(dir), fields(dir = %dir.as_ref().display()))]
    pub fn new(dir: impl AsRef<Path>) -> Self {
        debug!("Creating FileStore");
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// Returns the root directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Maps a key to its file, rejecting keys that could escape the directory.
    #[instrument(skip(self))]
    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(StorageError::new(format!("Invalid storage key: '{}'", key)));
        }
        Ok(self.dir.join(format!("{}.{}", key, EXTENSION)))
    }
}

impl KeyValueStore for FileStore {
    #[instrument(skip(self))]
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;
        match std::fs::read_to_string(&path) {
            Ok(value) => {
                debug!(path = %path.display(), bytes = value.len(), "Read key");
                Ok(Some(value))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    #[instrument(skip(self, value), fields(bytes = value.len()))]
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        std::fs::create_dir_all(&self.dir)?;
        let tmp = path.with_extension(format!("{}.tmp", EXTENSION));
        let written = std::fs::write(&tmp, value).and_then(|()| std::fs::rename(&tmp, &path));
        if let Err(e) = written {
            if let Err(cleanup) = std::fs::remove_file(&tmp)
                && cleanup.kind() != ErrorKind::NotFound
            {
                warn!(path = %tmp.display(), error = %cleanup, "Could not remove temporary file");
            }
            return Err(e.into());
        }
        debug!(path = %path.display(), "Wrote key");
        Ok(())
    }

    #[instrument(skip(self))]
    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        match std::fs::remove_file(&path) {
            Ok(()) => {
                debug!(path = %path.display(), "Removed key");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
