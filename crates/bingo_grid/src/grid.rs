//! The 5x5 grid snapshot and its pure transformations.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::{Cell, CellId, GridError, GridErrorKind, Seed};

/// Cells per row and per column.
pub const GRID_SIZE: usize = 5;

/// Cells per grid.
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// Checks that `ids` holds exactly 25 distinct in-range ids.
pub(crate) fn check_ids(ids: impl ExactSizeIterator<Item = CellId>) -> Result<(), GridError> {
    if ids.len() != CELL_COUNT {
        return Err(GridError::new(GridErrorKind::WrongLength {
            expected: CELL_COUNT,
            found: ids.len(),
        }));
    }
    let mut seen = BTreeSet::new();
    for id in ids {
        if !id.is_in_range() {
            return Err(GridError::new(GridErrorKind::IdOutOfRange(id)));
        }
        if !seen.insert(id) {
            return Err(GridError::new(GridErrorKind::DuplicateId(id)));
        }
    }
    Ok(())
}

/// Immutable snapshot of one game's board.
///
/// Always holds exactly [`CELL_COUNT`] cells in row-major order: index `i`
/// sits at row `i / 5`, column `i % 5`. The length check runs on
/// construction and on deserialization, so a stored array of any other
/// length is rejected before it reaches the rules.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Cell>", into = "Vec<Cell>")]
pub struct Grid {
    cells: Vec<Cell>,
}

impl TryFrom<Vec<Cell>> for Grid {
    type Error = GridError;

    fn try_from(cells: Vec<Cell>) -> Result<Self, Self::Error> {
        check_ids(cells.iter().map(|c| *c.id()))?;
        Ok(Self { cells })
    }
}

impl From<Grid> for Vec<Cell> {
    fn from(grid: Grid) -> Self {
        grid.cells
    }
}

impl Grid {
    /// Builds a fresh grid from `seed`: seed order, nothing completed.
    #[instrument(skip(seed))]
    pub fn reset(seed: &Seed) -> Self {
        let cells = seed
            .entries()
            .iter()
            .map(|entry| Cell::new(*entry.id(), entry.text().clone(), false))
            .collect();
        debug!("Grid reset from seed");
        Self { cells }
    }

    /// Returns a new grid with the cell `id` flipped.
    ///
    /// An id that is not on the grid leaves it unchanged.
    #[instrument(skip(self), fields(cell_id = %id))]
    pub fn toggle(&self, id: CellId) -> Self {
        let Some(index) = self.index_of(id) else {
            debug!("Toggle target not on grid, ignoring");
            return self.clone();
        };
        let mut cells = self.cells.clone();
        cells[index] = cells[index].toggled();
        debug!(index, completed = cells[index].is_completed(), "Cell toggled");
        Self { cells }
    }

    /// Returns a new grid with every listed id marked completed.
    ///
    /// Ids not on the grid are skipped.
    #[instrument(skip(self, ids))]
    pub fn mark_completed(&self, ids: impl IntoIterator<Item = CellId>) -> Self {
        let ids: BTreeSet<CellId> = ids.into_iter().collect();
        let cells = self
            .cells
            .iter()
            .map(|cell| {
                if ids.contains(cell.id()) {
                    cell.with_completed(true)
                } else {
                    cell.clone()
                }
            })
            .collect();
        Self { cells }
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Cell at a row-major index (0-24).
    pub fn get(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }

    /// Cell at `row`, `col` (both 0-4).
    pub fn at(&self, row: usize, col: usize) -> Option<&Cell> {
        if row >= GRID_SIZE || col >= GRID_SIZE {
            return None;
        }
        self.get(row * GRID_SIZE + col)
    }

    /// Cell with the given id.
    pub fn cell(&self, id: CellId) -> Option<&Cell> {
        self.index_of(id).map(|i| &self.cells[i])
    }

    /// Row-major index of the cell with the given id.
    pub fn index_of(&self, id: CellId) -> Option<usize> {
        self.cells.iter().position(|c| *c.id() == id)
    }

    /// Whether a cell with `id` is on the grid.
    pub fn contains(&self, id: CellId) -> bool {
        self.index_of(id).is_some()
    }

    /// Ids in row-major order.
    pub fn ids(&self) -> impl Iterator<Item = CellId> + '_ {
        self.cells.iter().map(|c| *c.id())
    }

    /// Whether this grid carries exactly the seed's ids in seed order.
    ///
    /// Labels are not compared; a snapshot saved before a wording change
    /// still belongs to the seed.
    #[instrument(skip(self, seed))]
    pub fn matches_seed(&self, seed: &Seed) -> bool {
        self.ids().eq(seed.entries().iter().map(|e| *e.id()))
    }

    /// Formats the grid as a plain-text 5x5 board of ids and marks.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for (row, chunk) in self.cells.chunks(GRID_SIZE).enumerate() {
            let line: Vec<String> = chunk
                .iter()
                .map(|cell| {
                    let mark = if cell.is_completed() { 'x' } else { ' ' };
                    format!("{:>2}[{}]", cell.id().get(), mark)
                })
                .collect();
            result.push_str(&line.join(" "));
            if row + 1 < GRID_SIZE {
                result.push('\n');
            }
        }
        result
    }
}
