//! Exhaustive game-tree search.

use super::Strategy;
use crate::error::NoLegalMove;
use crate::rules::has_line;
use crate::types::{Board, Move, Player};
use rand::RngCore;
use tracing::{debug, instrument};

/// Score of a win reached on the first ply below the root.
const WIN: i32 = 10;

/// Full minimax over the remaining empty cells.
///
/// Terminal positions score `WIN - depth` when the acting player has a
/// line, `depth - WIN` when the opponent has one, and `0` for a draw, so
/// quicker wins and slower losses are preferred. The root keeps the
/// candidate with the strictly greatest score, which makes ties go to the
/// earliest cell in row-major order. Plays deterministically and never
/// loses.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinimaxStrategy;

impl MinimaxStrategy {
    /// Scores every empty cell for `acting`, in row-major order.
    #[instrument(skip(self, board), fields(board = %board))]
    pub fn score_moves(&self, board: &Board, acting: Player, opponent: Player) -> Vec<(Move, i32)> {
        let mut scratch = *board;
        let candidates: Vec<Move> = board.empty_cells().collect();

        candidates
            .into_iter()
            .map(|mv| {
                scratch.place(mv, acting);
                let score = search(&mut scratch, 0, false, acting, opponent);
                scratch.clear(mv);
                (mv, score)
            })
            .collect()
    }
}

impl Strategy for MinimaxStrategy {
    fn select_move(
        &self,
        board: &Board,
        acting: Player,
        opponent: Player,
        _rng: &mut dyn RngCore,
    ) -> Result<Move, NoLegalMove> {
        let mut best: Option<(Move, i32)> = None;
        for (mv, score) in self.score_moves(board, acting, opponent) {
            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((mv, score));
            }
        }

        let (mv, score) = best.ok_or(NoLegalMove)?;
        debug!(%mv, score, "Search complete");
        Ok(mv)
    }

    fn name(&self) -> &'static str {
        "minimax"
    }
}

/// Scores `board` from `max`'s point of view with `depth` plies played
/// below the root move.
///
/// Marks placed on `board` are cleared again before returning.
fn search(board: &mut Board, depth: i32, maximizing: bool, max: Player, min: Player) -> i32 {
    if has_line(board, max) {
        return WIN - depth;
    }
    if has_line(board, min) {
        return depth - WIN;
    }
    if board.is_full() {
        return 0;
    }

    let (mark, mut best) = if maximizing {
        (max, i32::MIN)
    } else {
        (min, i32::MAX)
    };

    for mv in Move::all() {
        if !board.is_empty(mv) {
            continue;
        }
        board.place(mv, mark);
        let score = search(board, depth + 1, !maximizing, max, min);
        board.clear(mv);

        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }

    best
}
