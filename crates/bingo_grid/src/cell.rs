//! Cell identity and per-cell state.

use derive_getters::Getters;
use derive_more::{Display, From};
use serde::{Deserialize, Serialize};

/// Stable identifier of a grid cell (`1..=25`).
///
/// Ids survive across sessions and are what the presentation layer
/// dispatches on; grid position is derived from seed order, not from the id.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display, From,
)]
#[serde(transparent)]
pub struct CellId(u8);

impl CellId {
    /// Smallest valid id.
    pub const MIN: u8 = 1;
    /// Largest valid id.
    pub const MAX: u8 = 25;

    /// Wraps a raw id. Range is checked when a grid or seed is built.
    pub const fn new(raw: u8) -> Self {
        Self(raw)
    }

    /// Returns the raw id.
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Whether the id lies in `1..=25`.
    pub const fn is_in_range(self) -> bool {
        self.0 >= Self::MIN && self.0 <= Self::MAX
    }
}

/// One square of a bingo grid.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct Cell {
    /// Stable id.
    id: CellId,
    /// Display label, never mutated.
    text: String,
    /// Whether the player has marked this cell.
    completed: bool,
}

impl Cell {
    /// Creates a cell.
    pub fn new(id: impl Into<CellId>, text: impl Into<String>, completed: bool) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            completed,
        }
    }

    /// Whether the cell is marked.
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Returns a copy with the completed flag inverted.
    pub(crate) fn toggled(&self) -> Self {
        Self {
            completed: !self.completed,
            ..self.clone()
        }
    }

    /// Returns a copy with the completed flag set.
    pub(crate) fn with_completed(&self, completed: bool) -> Self {
        Self {
            completed,
            ..self.clone()
        }
    }
}
