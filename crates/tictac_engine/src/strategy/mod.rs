//! Computer opponents.
//!
//! Each strategy is a pure choice of one legal [`Move`] for the acting
//! player. Strategies read the board they are given and explore on their
//! own copy; nothing they do is visible to the caller beyond the returned
//! move. Randomness comes from the caller through `rng`, so a seeded
//! generator makes every tier reproducible.

mod heuristic;
mod minimax;
mod random;

pub use heuristic::HeuristicStrategy;
pub use minimax::MinimaxStrategy;
pub use random::RandomStrategy;

use super::error::NoLegalMove;
use super::types::{Board, DifficultyTier, Move, Player};
use rand::RngCore;
use tracing::{debug, instrument};

/// A policy that picks the computer's next move.
pub trait Strategy {
    /// Chooses a legal move for `acting` against `opponent`.
    ///
    /// # Errors
    ///
    /// Returns [`NoLegalMove`] when the board has no empty cell.
    fn select_move(
        &self,
        board: &Board,
        acting: Player,
        opponent: Player,
        rng: &mut dyn RngCore,
    ) -> Result<Move, NoLegalMove>;

    /// Short name for logs.
    fn name(&self) -> &'static str;
}

impl DifficultyTier {
    /// Returns the strategy that plays at this tier.
    pub fn strategy(self) -> &'static dyn Strategy {
        match self {
            DifficultyTier::Easy => &RandomStrategy,
            DifficultyTier::Medium => &HeuristicStrategy,
            DifficultyTier::Hard => &MinimaxStrategy,
        }
    }
}

/// Chooses the computer's move at the given tier.
///
/// Callers check [`crate::outcome`] first; asking for a move on a full
/// board is a programming error reported as [`NoLegalMove`].
#[instrument(skip(board, rng), fields(board = %board))]
pub fn select_move(
    board: &Board,
    tier: DifficultyTier,
    acting: Player,
    opponent: Player,
    rng: &mut dyn RngCore,
) -> Result<Move, NoLegalMove> {
    let strategy = tier.strategy();
    let mv = strategy.select_move(board, acting, opponent, rng)?;
    debug!(strategy = strategy.name(), %mv, "Computer move selected");
    Ok(mv)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use strum::IntoEnumIterator;

    #[test]
    fn test_every_tier_fails_on_full_board() {
        let board: Board = "XOX/XOO/OXX".parse().unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        for tier in DifficultyTier::iter() {
            assert_eq!(
                select_move(&board, tier, Player::O, Player::X, &mut rng),
                Err(NoLegalMove),
                "tier {}",
                tier
            );
        }
    }

    #[test]
    fn test_every_tier_returns_legal_move_and_leaves_board() {
        let board: Board = "X.O/.X./...".parse().unwrap();
        let before = board;
        let mut rng = StdRng::seed_from_u64(2);
        for tier in DifficultyTier::iter() {
            let chosen = select_move(&board, tier, Player::O, Player::X, &mut rng);
            let mv = chosen.unwrap();
            assert!(crate::is_legal(&board, mv), "tier {} chose {}", tier, mv);
            assert_eq!(board, before);
        }
    }
}
