//! Player session: the name gate and the active game tab.

use derive_getters::Getters;
use derive_more::{Display, Error};
use tracing::{debug, info, instrument};

use crate::GameKind;

/// Whether the player still has to enter a name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameGate {
    /// No usable name yet; the board is hidden.
    AwaitingName,
    /// A name is set; the boards are shown.
    Ready,
}

/// A blank or whitespace-only name was submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Player name cannot be empty")]
pub struct EmptyName;

/// Transient UI selection state.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct GameSession {
    player_name: String,
    active_game: GameKind,
    gate: NameGate,
}

impl GameSession {
    /// Starts a session, `Ready` iff a non-empty name was restored.
    #[instrument]
    pub fn new(restored_name: Option<String>) -> Self {
        let player_name = restored_name
            .map(|n| n.trim().to_string())
            .unwrap_or_default();
        let gate = if player_name.is_empty() {
            NameGate::AwaitingName
        } else {
            NameGate::Ready
        };
        debug!(gate = ?gate, "Session started");
        Self {
            player_name,
            active_game: GameKind::default(),
            gate,
        }
    }

    /// Accepts a trimmed, non-empty name and opens the gate.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyName`] for blank input; the gate does not move.
    #[instrument(skip(self))]
    pub fn submit_name(&mut self, raw: &str) -> Result<&str, EmptyName> {
        let name = raw.trim();
        if name.is_empty() {
            debug!("Rejected empty name");
            return Err(EmptyName);
        }
        self.player_name = name.to_string();
        self.gate = NameGate::Ready;
        info!(player = %self.player_name, "Player ready");
        Ok(&self.player_name)
    }

    /// Returns to name entry. The previous name is kept as a suggestion.
    #[instrument(skip(self))]
    pub fn change_player(&mut self) {
        info!(player = %self.player_name, "Changing player");
        self.gate = NameGate::AwaitingName;
    }

    /// Shows the given game.
    #[instrument(skip(self))]
    pub fn select_game(&mut self, game: GameKind) {
        self.active_game = game;
    }

    /// Flips to the other game.
    #[instrument(skip(self))]
    pub fn switch_game(&mut self) {
        self.active_game = self.active_game.other();
    }

    /// Whether the boards are shown.
    pub fn is_ready(&self) -> bool {
        self.gate == NameGate::Ready
    }
}
