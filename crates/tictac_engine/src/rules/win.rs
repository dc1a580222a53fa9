//! Win detection logic for tic-tac-toe.

use super::super::types::{Board, Cell, Player};
use tracing::instrument;

/// The eight winning lines as flat cell indices.
pub const LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Checks if there is a winner on the board.
///
/// Returns the owner of the first complete line found. Two players
/// holding lines at once cannot happen through [`super::apply_move`]
/// with alternating turns.
#[instrument(skip(board), fields(board = %board))]
pub fn winner(board: &Board) -> Option<Player> {
    let cells = board.cells();
    for [a, b, c] in LINES {
        if let Cell::Occupied(player) = cells[a]
            && cells[b] == cells[a]
            && cells[c] == cells[a]
        {
            return Some(player);
        }
    }
    None
}

/// Checks whether `player` holds any complete line.
pub fn has_line(board: &Board, player: Player) -> bool {
    let cells = board.cells();
    let mark = Cell::Occupied(player);
    LINES
        .iter()
        .any(|line| line.iter().all(|&index| cells[index] == mark))
}
