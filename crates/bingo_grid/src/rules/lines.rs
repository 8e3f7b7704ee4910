//! Line detection: rows, columns and the two diagonals.

use std::fmt;

use tracing::instrument;

use crate::{GRID_SIZE, Grid};

/// One of the 12 scoring lines of a 5x5 grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Line {
    /// Row `0..5`, top to bottom.
    Row(usize),
    /// Column `0..5`, left to right.
    Column(usize),
    /// Top-left to bottom-right.
    MainDiagonal,
    /// Top-right to bottom-left.
    AntiDiagonal,
}

impl Line {
    /// All 12 lines: rows, then columns, then diagonals.
    pub const ALL: [Line; 12] = [
        Line::Row(0),
        Line::Row(1),
        Line::Row(2),
        Line::Row(3),
        Line::Row(4),
        Line::Column(0),
        Line::Column(1),
        Line::Column(2),
        Line::Column(3),
        Line::Column(4),
        Line::MainDiagonal,
        Line::AntiDiagonal,
    ];

    /// Row-major grid indices covered by this line.
    pub fn indices(self) -> [usize; GRID_SIZE] {
        let mut out = [0; GRID_SIZE];
        for (k, slot) in out.iter_mut().enumerate() {
            *slot = match self {
                Line::Row(r) => r * GRID_SIZE + k,
                Line::Column(c) => c + k * GRID_SIZE,
                Line::MainDiagonal => k * GRID_SIZE + k,
                Line::AntiDiagonal => k * GRID_SIZE + (GRID_SIZE - 1 - k),
            };
        }
        out
    }

    /// Whether every cell on this line is completed.
    pub fn is_complete(self, grid: &Grid) -> bool {
        self.indices()
            .iter()
            .all(|&i| grid.get(i).is_some_and(|cell| cell.is_completed()))
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Line::Row(r) => write!(f, "Row {}", r + 1),
            Line::Column(c) => write!(f, "Column {}", c + 1),
            Line::MainDiagonal => write!(f, "Diagonal (top-left to bottom-right)"),
            Line::AntiDiagonal => write!(f, "Diagonal (top-right to bottom-left)"),
        }
    }
}

/// Counts complete lines (0-12).
///
/// Each line is evaluated on its own, so a cell shared by two complete
/// lines contributes to both.
#[instrument(skip(grid))]
pub fn count_completed_lines(grid: &Grid) -> usize {
    Line::ALL
        .iter()
        .filter(|line| line.is_complete(grid))
        .count()
}

/// Lists complete lines in [`Line::ALL`] order.
#[instrument(skip(grid))]
pub fn completed_lines(grid: &Grid) -> Vec<Line> {
    Line::ALL
        .iter()
        .copied()
        .filter(|line| line.is_complete(grid))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CELL_COUNT, Cell};

    fn grid_with(completed: &[usize]) -> Grid {
        let cells: Vec<Cell> = (0..CELL_COUNT)
            .map(|i| Cell::new(i as u8 + 1, format!("cell {}", i + 1), completed.contains(&i)))
            .collect();
        Grid::try_from(cells).unwrap()
    }

    #[test]
    fn test_no_lines_on_empty_grid() {
        assert_eq!(count_completed_lines(&grid_with(&[])), 0);
    }

    #[test]
    fn test_all_lines_on_full_grid() {
        let all: Vec<usize> = (0..CELL_COUNT).collect();
        assert_eq!(count_completed_lines(&grid_with(&all)), 12);
    }

    #[test]
    fn test_top_row() {
        let grid = grid_with(&[0, 1, 2, 3, 4]);
        assert_eq!(count_completed_lines(&grid), 1);
        assert_eq!(completed_lines(&grid), vec![Line::Row(0)]);
    }

    #[test]
    fn test_column() {
        let grid = grid_with(&[2, 7, 12, 17, 22]);
        assert_eq!(completed_lines(&grid), vec![Line::Column(2)]);
    }

    #[test]
    fn test_both_diagonals_share_center() {
        let grid = grid_with(&[0, 6, 12, 18, 24, 4, 8, 16, 20]);
        assert_eq!(count_completed_lines(&grid), 2);
        assert_eq!(
            completed_lines(&grid),
            vec![Line::MainDiagonal, Line::AntiDiagonal]
        );
    }

    #[test]
    fn test_incomplete_row() {
        let grid = grid_with(&[0, 1, 2, 3]);
        assert_eq!(count_completed_lines(&grid), 0);
    }

    #[test]
    fn test_line_indices() {
        assert_eq!(Line::Row(1).indices(), [5, 6, 7, 8, 9]);
        assert_eq!(Line::Column(4).indices(), [4, 9, 14, 19, 24]);
        assert_eq!(Line::MainDiagonal.indices(), [0, 6, 12, 18, 24]);
        assert_eq!(Line::AntiDiagonal.indices(), [4, 8, 12, 16, 20]);
    }
}
