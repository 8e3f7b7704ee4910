//! Conference Bingo library - two persisted 5x5 bingo boards
//!
//! Attendees play a "Sustainability Travel" and a "Conference Learning"
//! board side by side. Cells toggle between done and not done; each board
//! reports completed cells, progress and complete lines, and both boards and
//! the player name survive restarts.
//!
//! # Architecture
//!
//! - **Grid logic**: the `bingo_grid` crate (pure, no I/O)
//! - **Storage**: [`KeyValueStore`] backends ([`FileStore`], [`MemoryStore`])
//! - **Persistence**: [`PersistenceAdapter`], best-effort typed access
//! - **Service**: [`BingoService`] owns both [`GameSlot`]s and the [`GameSession`]
//! - **Front ends**: the terminal UI ([`run_tui`]) and the CLI binary
//!
//! # Example
//!
//! ```
//! use conference_bingo::{BingoConfig, BingoService, GameKind, MemoryStore, PersistenceAdapter};
//! use bingo_grid::CellId;
//!
//! # fn example() -> anyhow::Result<()> {
//! let persistence = PersistenceAdapter::new(MemoryStore::new());
//! let mut service = BingoService::open(persistence, &BingoConfig::default())?;
//!
//! service.toggle(GameKind::Learning, CellId::new(1));
//! assert_eq!(*service.stats(GameKind::Learning).completed_count(), 2);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod catalog;
mod config;
mod persistence;
mod service;
mod session;
mod slot;
mod storage;
mod tui;

// Crate-level exports - Games and configuration
pub use catalog::GameKind;
pub use config::{BingoConfig, ConfigError};

// Crate-level exports - Storage and persistence
pub use persistence::{PLAYER_NAME_KEY, PersistenceAdapter, PersistenceError, PersistenceErrorKind};
pub use storage::{FileStore, KeyValueStore, MemoryStore, StorageError};

// Crate-level exports - Game state
pub use service::BingoService;
pub use session::{EmptyName, GameSession, NameGate};
pub use slot::{GameSlot, ToggleOutcome};

// Crate-level exports - Terminal UI
pub use tui::run_tui;
