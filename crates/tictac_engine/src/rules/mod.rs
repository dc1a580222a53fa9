//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. Nothing here keeps state between
//! calls; the outcome is recomputed from the cells every time it is asked
//! for.

pub mod draw;
pub mod play;
pub mod win;

pub use draw::is_full;
pub use play::{apply_move, is_legal};
pub use win::{LINES, has_line, winner};

use super::types::{Board, GameOutcome};
use tracing::instrument;

/// Derives the outcome of a board.
///
/// A win is checked before a draw, so a full board that also holds a line
/// is reported as a win.
#[instrument(skip(board), fields(board = %board))]
pub fn outcome(board: &Board) -> GameOutcome {
    if let Some(player) = winner(board) {
        GameOutcome::Win(player)
    } else if is_full(board) {
        GameOutcome::Draw
    } else {
        GameOutcome::InProgress
    }
}
