//! Error types for the rules engine and strategies.

use super::types::Move;

/// A move that cannot be applied to the board.
///
/// Rejecting a move never touches the board it was checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum InvalidMove {
    /// The move addresses a cell outside the 3x3 grid.
    #[display("Cell ({row}, {col}) is off the board")]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The move addresses a cell that already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    Occupied(Move),
}

impl std::error::Error for InvalidMove {}

/// A strategy was asked to move on a board with no empty cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[display("No legal move available: the board is full")]
pub struct NoLegalMove;

impl std::error::Error for NoLegalMove {}

/// Textual board notation that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ParseBoardError {
    /// Notation did not contain exactly nine cells.
    #[display("Expected 9 cells, found {}", _0)]
    WrongLength(usize),

    /// A character is not a mark or an empty-cell symbol.
    #[display("Unknown cell symbol {:?}", _0)]
    UnknownSymbol(char),

    /// Mark counts cannot arise from alternating play with X first.
    #[display("Inconsistent mark counts: {x} X against {o} O")]
    Inconsistent {
        /// Number of X marks.
        x: usize,
        /// Number of O marks.
        o: usize,
    },
}

impl std::error::Error for ParseBoardError {}
