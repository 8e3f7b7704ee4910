//! Bingo service: both boards, the session and write-through persistence.

use bingo_grid::{CellId, Grid, GridError, GridStats};
use tracing::{debug, info, instrument, warn};

use crate::persistence::PLAYER_NAME_KEY;
use crate::{
    BingoConfig, EmptyName, GameKind, GameSession, GameSlot, PersistenceAdapter, ToggleOutcome,
};

/// Drives both games for one player.
///
/// Front ends hold a `BingoService` and call into it; every change to a
/// board or the player name is saved immediately through the injected
/// [`PersistenceAdapter`].
#[derive(Debug)]
pub struct BingoService {
    persistence: PersistenceAdapter,
    sustainability: GameSlot,
    learning: GameSlot,
    session: GameSession,
}

impl BingoService {
    /// Restores both boards and the player name from `persistence`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError`] if the configured locked ids are not valid
    /// cell ids.
    #[instrument(skip(persistence, config))]
    pub fn open(persistence: PersistenceAdapter, config: &BingoConfig) -> Result<Self, GridError> {
        info!(locked = ?config.locked_cells(), "Opening bingo service");
        let locked = config.locked_ids();

        let sustainability = GameSlot::load(
            GameKind::Sustainability,
            GameKind::Sustainability.seed(locked.iter().copied())?,
            &persistence,
        );
        let learning = GameSlot::load(
            GameKind::Learning,
            GameKind::Learning.seed(locked.iter().copied())?,
            &persistence,
        );

        let restored_name = match persistence.load_text(PLAYER_NAME_KEY) {
            Ok(name) => name,
            Err(e) => {
                warn!(error = %e, "Could not read player name");
                None
            }
        };
        let session = GameSession::new(restored_name);

        Ok(Self {
            persistence,
            sustainability,
            learning,
            session,
        })
    }

    /// Returns the persistence adapter.
    pub fn persistence(&self) -> &PersistenceAdapter {
        &self.persistence
    }

    /// Returns the session state.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Returns a game's slot.
    pub fn slot(&self, game: GameKind) -> &GameSlot {
        match game {
            GameKind::Sustainability => &self.sustainability,
            GameKind::Learning => &self.learning,
        }
    }

    fn slot_mut(&mut self, game: GameKind) -> &mut GameSlot {
        match game {
            GameKind::Sustainability => &mut self.sustainability,
            GameKind::Learning => &mut self.learning,
        }
    }

    /// Returns a game's current board.
    pub fn grid(&self, game: GameKind) -> &Grid {
        self.slot(game).grid()
    }

    /// Returns a game's statistics.
    #[instrument(skip(self))]
    pub fn stats(&self, game: GameKind) -> GridStats {
        self.slot(game).stats()
    }

    /// Toggles a cell and saves the board if it changed.
    #[instrument(skip(self))]
    pub fn toggle(&mut self, game: GameKind, id: CellId) -> ToggleOutcome {
        let outcome = self.slot_mut(game).toggle(id);
        if outcome.changed() {
            self.save_grid(game);
            let stats = self.stats(game);
            info!(
                game = %game,
                cell_id = %id,
                completed = *stats.completed_count(),
                bingo_count = *stats.bingo_count(),
                "Cell toggled"
            );
        } else {
            debug!(outcome = ?outcome, "Toggle ignored");
        }
        outcome
    }

    /// Resets one game and saves it.
    #[instrument(skip(self))]
    pub fn reset(&mut self, game: GameKind) {
        self.slot_mut(game).reset();
        self.save_grid(game);
    }

    /// Resets both games, clearing their stored snapshots first.
    #[instrument(skip(self))]
    pub fn reset_all(&mut self) {
        info!("Resetting all games");
        for game in GameKind::ALL {
            self.persistence.remove(game.storage_key());
            self.reset(game);
        }
    }

    /// Sets the player name and saves it.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyName`] for blank input; nothing is saved.
    #[instrument(skip(self))]
    pub fn submit_name(&mut self, raw: &str) -> Result<(), EmptyName> {
        let name = self.session.submit_name(raw)?.to_string();
        self.persistence.save_text(PLAYER_NAME_KEY, &name);
        Ok(())
    }

    /// Returns to name entry.
    #[instrument(skip(self))]
    pub fn change_player(&mut self) {
        self.session.change_player();
    }

    /// Shows the given game.
    #[instrument(skip(self))]
    pub fn select_game(&mut self, game: GameKind) {
        self.session.select_game(game);
    }

    /// Flips to the other game.
    #[instrument(skip(self))]
    pub fn switch_game(&mut self) {
        self.session.switch_game();
    }

    #[instrument(skip(self))]
    fn save_grid(&self, game: GameKind) {
        self.persistence
            .save(game.storage_key(), self.slot(game).grid());
    }
}
