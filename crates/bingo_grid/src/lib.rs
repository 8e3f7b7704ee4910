//! Pure bingo grid logic.
//!
//! A [`Grid`] is an immutable snapshot of 25 [`Cell`]s in row-major order.
//! [`Grid::toggle`] and [`Grid::reset`] produce new snapshots; the
//! [`rules`] module derives line counts and progress statistics from them.
//! Nothing in this crate performs I/O.
//!
//! # Example
//!
//! ```
//! use bingo_grid::{CellId, Grid, GridStats, Seed};
//!
//! let labels: Vec<String> = (1..=25).map(|i| format!("Task {i}")).collect();
//! let labels: Vec<&str> = labels.iter().map(String::as_str).collect();
//! let seed = Seed::from_labels(&labels, [CellId::new(13)])?;
//!
//! let grid = Grid::reset(&seed).toggle(CellId::new(1));
//! assert_eq!(*GridStats::of(&grid).completed_count(), 1);
//! # Ok::<(), bingo_grid::GridError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cell;
mod error;
mod grid;
pub mod rules;
mod seed;

pub use cell::{Cell, CellId};
pub use error::{GridError, GridErrorKind};
pub use grid::{CELL_COUNT, GRID_SIZE, Grid};
pub use rules::{GridStats, Line, completed_lines, count_completed_lines};
pub use seed::{Seed, SeedEntry};
