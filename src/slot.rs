//! One game's board: its seed, current snapshot and toggle policy.

use bingo_grid::{CellId, Grid, GridStats, Line, Seed, completed_lines};
use derive_getters::Getters;
use tracing::{debug, info, instrument, warn};

use crate::{GameKind, PersistenceAdapter};

/// Result of asking a slot to toggle a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The cell flipped; carries its new completed flag.
    Toggled {
        /// Completed flag after the toggle.
        completed: bool,
    },
    /// The cell is in the seed's locked set and was left alone.
    Locked,
    /// No cell has this id.
    UnknownCell,
}

impl ToggleOutcome {
    /// Whether the grid changed.
    pub fn changed(self) -> bool {
        matches!(self, Self::Toggled { .. })
    }
}

/// The board owned by one game.
///
/// The slot enforces the locked-cell policy from its [`Seed`]; the
/// [`Grid`] itself toggles any id it holds. Locked cells are free spaces:
/// they are completed on every board the slot holds, so every line stays
/// winnable.
#[derive(Debug, Clone, Getters)]
pub struct GameSlot {
    kind: GameKind,
    seed: Seed,
    grid: Grid,
}

impl GameSlot {
    /// Creates a slot holding a fresh board.
    #[instrument(skip(seed))]
    pub fn fresh(kind: GameKind, seed: Seed) -> Self {
        let grid = initial_grid(&seed);
        Self { kind, seed, grid }
    }

    /// Restores the slot from the store, falling back to a fresh board.
    ///
    /// A stored snapshot that fails to decode, or whose ids differ from the
    /// seed, is discarded. An unreadable store is treated like an empty one.
    /// Locked cells of a restored snapshot are marked completed.
    #[instrument(skip(seed, persistence))]
    pub fn load(kind: GameKind, seed: Seed, persistence: &PersistenceAdapter) -> Self {
        let key = kind.storage_key();
        match persistence.load::<Grid>(key) {
            Ok(Some(grid)) if grid.matches_seed(&seed) => {
                info!(game = %kind, "Restored saved board");
                let grid = with_free_spaces(grid, &seed);
                Self { kind, seed, grid }
            }
            Ok(Some(_)) => {
                warn!(game = %kind, "Saved board does not match seed ids, using seed");
                Self::fresh(kind, seed)
            }
            Ok(None) => {
                debug!(game = %kind, "No saved board, using seed");
                Self::fresh(kind, seed)
            }
            Err(e) => {
                warn!(game = %kind, error = %e, "Could not restore board, using seed");
                Self::fresh(kind, seed)
            }
        }
    }

    /// Toggles `id` unless it is locked or absent.
    #[instrument(skip(self), fields(game = %self.kind, cell_id = %id))]
    pub fn toggle(&mut self, id: CellId) -> ToggleOutcome {
        if self.seed.is_locked(id) {
            debug!("Cell is locked");
            return ToggleOutcome::Locked;
        }
        if !self.grid.contains(id) {
            debug!("Cell not on board");
            return ToggleOutcome::UnknownCell;
        }
        self.grid = self.grid.toggle(id);
        let completed = self.grid.cell(id).is_some_and(|c| c.is_completed());
        ToggleOutcome::Toggled { completed }
    }

    /// Puts the board back to its initial state.
    #[instrument(skip(self), fields(game = %self.kind))]
    pub fn reset(&mut self) {
        self.grid = initial_grid(&self.seed);
        info!("Board reset");
    }

    /// Whether the player may not toggle `id`.
    pub fn is_locked(&self, id: CellId) -> bool {
        self.seed.is_locked(id)
    }

    /// Statistics for the current board.
    #[instrument(skip(self), fields(game = %self.kind))]
    pub fn stats(&self) -> GridStats {
        GridStats::of(&self.grid)
    }

    /// Complete lines on the current board.
    #[instrument(skip(self), fields(game = %self.kind))]
    pub fn completed_lines(&self) -> Vec<Line> {
        completed_lines(&self.grid)
    }
}

/// Seed grid with its free spaces marked.
#[instrument(skip(seed))]
fn initial_grid(seed: &Seed) -> Grid {
    with_free_spaces(Grid::reset(seed), seed)
}

#[instrument(skip(grid, seed))]
fn with_free_spaces(grid: Grid, seed: &Seed) -> Grid {
    let unmarked = seed
        .locked()
        .iter()
        .filter(|id| grid.cell(**id).is_some_and(|c| !c.is_completed()))
        .count();
    if unmarked > 0 {
        debug!(unmarked, "Marking locked cells completed");
    }
    grid.mark_completed(seed.locked().iter().copied())
}
