//! One-ply win/block play.

use super::{RandomStrategy, Strategy};
use crate::error::NoLegalMove;
use crate::rules::has_line;
use crate::types::{Board, Move, Player};
use rand::RngCore;
use tracing::trace;

/// Takes an immediate win or blocks an immediate loss, otherwise plays
/// randomly.
///
/// Cells are scanned in row-major order and each cell is tested for a win
/// and then for a block before the scan moves on. An earlier block
/// therefore pre-empts a later win. That ordering is part of the observable
/// behavior of this tier and is kept as is.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicStrategy;

impl Strategy for HeuristicStrategy {
    fn select_move(
        &self,
        board: &Board,
        acting: Player,
        opponent: Player,
        rng: &mut dyn RngCore,
    ) -> Result<Move, NoLegalMove> {
        let mut scratch = *board;

        for mv in board.empty_cells() {
            scratch.place(mv, acting);
            let wins = has_line(&scratch, acting);
            scratch.clear(mv);
            if wins {
                trace!(%mv, "Winning cell");
                return Ok(mv);
            }

            scratch.place(mv, opponent);
            let blocks = has_line(&scratch, opponent);
            scratch.clear(mv);
            if blocks {
                trace!(%mv, "Blocking cell");
                return Ok(mv);
            }
        }

        RandomStrategy.select_move(board, acting, opponent, rng)
    }

    fn name(&self) -> &'static str {
        "heuristic"
    }
}
