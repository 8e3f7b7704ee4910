//! Grid construction errors.

use derive_more::{Display, Error};
use tracing::instrument;

use crate::CellId;

/// The reason a cell sequence or seed was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum GridErrorKind {
    /// The sequence did not hold exactly 25 cells.
    #[display("expected {expected} cells, found {found}")]
    WrongLength {
        /// Required number of cells.
        expected: usize,
        /// Number of cells actually supplied.
        found: usize,
    },
    /// A cell id appeared more than once.
    #[display("duplicate cell id {_0}")]
    DuplicateId(CellId),
    /// A cell id fell outside `1..=25`.
    #[display("cell id {_0} is out of range")]
    IdOutOfRange(CellId),
    /// A locked id names no cell in the seed.
    #[display("locked cell id {_0} is not part of the seed")]
    UnknownLockedId(CellId),
}

/// Grid error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Grid error: {} at {}:{}", kind, file, line)]
pub struct GridError {
    /// What was wrong with the input.
    pub kind: GridErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl GridError {
    /// Creates a new grid error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: GridErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
