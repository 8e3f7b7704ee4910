//! Display statistics derived from a grid.

use derive_getters::Getters;
use tracing::instrument;

use crate::rules::count_completed_lines;
use crate::{CELL_COUNT, Grid};

/// Number of completed cells (0-25).
#[instrument(skip(grid))]
pub fn completed_count(grid: &Grid) -> usize {
    grid.cells().iter().filter(|c| c.is_completed()).count()
}

/// Completed cells as a percentage of the grid (0.0-100.0).
#[instrument(skip(grid))]
pub fn progress_percentage(grid: &Grid) -> f64 {
    (completed_count(grid) as f64 / CELL_COUNT as f64) * 100.0
}

/// Everything the presentation layer shows next to a grid.
#[derive(Debug, Clone, Copy, PartialEq, Getters)]
pub struct GridStats {
    completed_count: usize,
    progress_percentage: f64,
    bingo_count: usize,
}

impl GridStats {
    /// Computes statistics for a snapshot.
    #[instrument(skip(grid))]
    pub fn of(grid: &Grid) -> Self {
        Self {
            completed_count: completed_count(grid),
            progress_percentage: progress_percentage(grid),
            bingo_count: count_completed_lines(grid),
        }
    }

    /// Whether at least one line is complete.
    pub fn has_bingo(&self) -> bool {
        self.bingo_count > 0
    }

    /// Headline for the bingo banner, or `None` before the first line.
    pub fn bingo_message(&self) -> Option<String> {
        match self.bingo_count {
            0 => None,
            1 => Some("You got BINGO!".to_string()),
            n => Some(format!("You got {} BINGO lines!", n)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cell;

    fn grid_with(completed: &[usize]) -> Grid {
        let cells: Vec<Cell> = (0..CELL_COUNT)
            .map(|i| Cell::new(i as u8 + 1, "x", completed.contains(&i)))
            .collect();
        Grid::try_from(cells).unwrap()
    }

    #[test]
    fn test_full_grid_stats() {
        let all: Vec<usize> = (0..CELL_COUNT).collect();
        let stats = GridStats::of(&grid_with(&all));
        assert_eq!(*stats.completed_count(), 25);
        assert_eq!(*stats.progress_percentage(), 100.0);
        assert_eq!(*stats.bingo_count(), 12);
        assert_eq!(stats.bingo_message().as_deref(), Some("You got 12 BINGO lines!"));
    }

    #[test]
    fn test_partial_progress() {
        let stats = GridStats::of(&grid_with(&[3, 9, 14, 20, 21]));
        assert_eq!(*stats.completed_count(), 5);
        assert_eq!(*stats.progress_percentage(), 20.0);
        assert!(!stats.has_bingo());
        assert_eq!(stats.bingo_message(), None);
    }

    #[test]
    fn test_single_bingo_message() {
        let stats = GridStats::of(&grid_with(&[5, 6, 7, 8, 9]));
        assert_eq!(stats.bingo_message().as_deref(), Some("You got BINGO!"));
    }
}
