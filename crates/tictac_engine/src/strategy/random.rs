//! Uniformly random play.

use super::Strategy;
use crate::error::NoLegalMove;
use crate::types::{Board, Move, Player};
use rand::RngCore;
use rand::seq::SliceRandom;

/// Picks any empty cell with equal probability.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn select_move(
        &self,
        board: &Board,
        _acting: Player,
        _opponent: Player,
        rng: &mut dyn RngCore,
    ) -> Result<Move, NoLegalMove> {
        let empty: Vec<Move> = board.empty_cells().collect();
        empty.choose(rng).copied().ok_or(NoLegalMove)
    }

    fn name(&self) -> &'static str {
        "random"
    }
}
