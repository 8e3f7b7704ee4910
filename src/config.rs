//! Application configuration loaded from TOML.

use std::path::{Path, PathBuf};

use bingo_grid::CellId;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Configuration for the bingo application.
///
/// Every field has a default, so an empty or missing file is valid.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct BingoConfig {
    /// Directory holding the persisted grids, player name and log file.
    #[serde(default = "default_data_dir")]
    data_dir: PathBuf,

    /// Free-space cell ids: always completed, never toggled by the player.
    #[serde(default = "default_locked_cells")]
    locked_cells: Vec<u8>,

    /// Keep state in memory only; nothing is written to `data_dir`.
    #[serde(default)]
    ephemeral: bool,
}

#[instrument]
fn default_data_dir() -> PathBuf {
    PathBuf::from(".conference_bingo")
}

#[instrument]
fn default_locked_cells() -> Vec<u8> {
    vec![13]
}

impl Default for BingoConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            locked_cells: default_locked_cells(),
            ephemeral: false,
        }
    }
}

impl BingoConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(data_dir = %config.data_dir.display(), "Config loaded successfully");
        Ok(config)
    }

    /// Loads the file if it exists, otherwise returns defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Overrides the data directory.
    #[instrument(skip(self))]
    pub fn with_data_dir(mut self, data_dir: PathBuf) -> Self {
        self.data_dir = data_dir;
        self
    }

    /// Overrides the in-memory flag.
    #[instrument(skip(self))]
    pub fn with_ephemeral(mut self, ephemeral: bool) -> Self {
        self.ephemeral = ephemeral;
        self
    }

    /// Overrides the locked cell ids.
    #[instrument(skip(self))]
    pub fn with_locked_cells(mut self, locked_cells: Vec<u8>) -> Self {
        self.locked_cells = locked_cells;
        self
    }

    /// Locked cell ids as typed ids.
    pub fn locked_ids(&self) -> Vec<CellId> {
        self.locked_cells.iter().copied().map(CellId::new).collect()
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
