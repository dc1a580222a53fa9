//! Move legality and application.

use super::super::error::InvalidMove;
use super::super::types::{Board, Move, Player};
use tracing::{debug, instrument};

/// Checks that `mv` addresses an empty cell on the grid.
#[instrument(skip(board), fields(board = %board))]
pub fn is_legal(board: &Board, mv: Move) -> bool {
    board.is_empty(mv)
}

/// Places `player`'s mark at `mv`, returning the resulting board.
///
/// The input board is left as it was whether the move is accepted or not.
/// Turn order is not checked here; callers that enforce alternation use
/// [`Board::next_player`].
///
/// # Errors
///
/// Returns [`InvalidMove::OutOfBounds`] for a cell off the grid and
/// [`InvalidMove::Occupied`] for a cell that already holds a mark.
#[instrument(skip(board), fields(board = %board))]
pub fn apply_move(board: &Board, mv: Move, player: Player) -> Result<Board, InvalidMove> {
    if !mv.in_bounds() {
        return Err(InvalidMove::OutOfBounds {
            row: mv.row,
            col: mv.col,
        });
    }
    if !is_legal(board, mv) {
        return Err(InvalidMove::Occupied(mv));
    }

    let mut next = *board;
    next.place(mv, player);
    debug!(%mv, %player, "Mark placed");
    Ok(next)
}
