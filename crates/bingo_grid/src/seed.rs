//! Seed data: the fixed labels a grid is (re)built from.

use std::collections::BTreeSet;

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::grid::check_ids;
use crate::{CELL_COUNT, CellId, GridError, GridErrorKind};

/// One label of a seed list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct SeedEntry {
    /// Stable cell id.
    id: CellId,
    /// Display label.
    text: String,
}

impl SeedEntry {
    /// Creates a seed entry.
    pub fn new(id: impl Into<CellId>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

/// Ordered list of 25 labels plus the ids the player may not toggle.
///
/// The locked set is policy data for callers; [`Grid`](crate::Grid) itself
/// toggles any id it holds.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Seed {
    entries: Vec<SeedEntry>,
    locked: BTreeSet<CellId>,
}

impl Seed {
    /// Creates a seed, validating ids and the locked set.
    ///
    /// # Errors
    ///
    /// Returns [`GridError`] if there are not exactly 25 entries, an id is
    /// out of range or repeated, or a locked id is not among the entries.
    #[instrument(skip(entries, locked))]
    pub fn new(
        entries: Vec<SeedEntry>,
        locked: impl IntoIterator<Item = CellId>,
    ) -> Result<Self, GridError> {
        check_ids(entries.iter().map(|e| *e.id()))?;
        let seed = Self {
            entries,
            locked: BTreeSet::new(),
        };
        seed.with_locked(locked)
    }

    /// Creates a seed from 25 labels, numbering them 1-25 in order.
    ///
    /// # Errors
    ///
    /// Returns [`GridError`] under the same conditions as [`Seed::new`].
    #[instrument(skip(labels, locked), fields(count = labels.len()))]
    pub fn from_labels(
        labels: &[&str],
        locked: impl IntoIterator<Item = CellId>,
    ) -> Result<Self, GridError> {
        if labels.len() != CELL_COUNT {
            return Err(GridError::new(GridErrorKind::WrongLength {
                expected: CELL_COUNT,
                found: labels.len(),
            }));
        }
        let entries = labels
            .iter()
            .zip(CellId::MIN..)
            .map(|(text, id)| SeedEntry::new(id, *text))
            .collect();
        Self::new(entries, locked)
    }

    /// Replaces the locked set.
    ///
    /// # Errors
    ///
    /// Returns [`GridError`] if a locked id is not among the entries.
    #[instrument(skip(self, locked))]
    pub fn with_locked(
        mut self,
        locked: impl IntoIterator<Item = CellId>,
    ) -> Result<Self, GridError> {
        let locked: BTreeSet<CellId> = locked.into_iter().collect();
        if let Some(unknown) = locked
            .iter()
            .find(|id| !self.entries.iter().any(|e| e.id() == *id))
        {
            return Err(GridError::new(GridErrorKind::UnknownLockedId(*unknown)));
        }
        self.locked = locked;
        Ok(self)
    }

    /// Whether callers must refuse to toggle `id`.
    pub fn is_locked(&self, id: CellId) -> bool {
        self.locked.contains(&id)
    }
}
