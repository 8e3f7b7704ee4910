//! Bingo rules.
//!
//! Pure functions over [`Grid`](crate::Grid) snapshots. Rules are kept
//! apart from cell storage so callers can recompute statistics from any
//! snapshot without touching persistence.

pub mod lines;
pub mod stats;

pub use lines::{Line, completed_lines, count_completed_lines};
pub use stats::{GridStats, completed_count, progress_percentage};
