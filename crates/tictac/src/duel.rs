//! Bot-against-bot matches.

use super::error::SessionError;
use super::scoreboard::Scoreboard;
use derive_getters::Getters;
use derive_new::new;
use rand::RngCore;
use tictac_engine::{Board, DifficultyTier, GameOutcome, Player, apply_move, outcome, select_move};
use tracing::{debug, info, instrument};

/// A series of games between two computer tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, new)]
pub struct Duel {
    /// Tier playing X.
    x_tier: DifficultyTier,
    /// Tier playing O.
    o_tier: DifficultyTier,
    /// Number of games to play.
    games: u32,
}

impl Duel {
    /// Plays every game from an empty board and returns the tally.
    ///
    /// # Errors
    ///
    /// Propagates engine errors; neither occurs while strategies only
    /// move on unfinished boards.
    #[instrument(skip(rng))]
    pub fn run(&self, rng: &mut dyn RngCore) -> Result<Scoreboard, SessionError> {
        let mut scoreboard = Scoreboard::new();
        for game in 0..self.games {
            let result = self.play_one(rng)?;
            debug!(game, %result, "Game finished");
            scoreboard.record(result);
        }
        info!(%scoreboard, "Duel complete");
        Ok(scoreboard)
    }

    /// Plays a single game.
    fn play_one(&self, rng: &mut dyn RngCore) -> Result<GameOutcome, SessionError> {
        let mut board = Board::new();
        let mut to_move = Player::X;

        loop {
            let result = outcome(&board);
            if result.is_terminal() {
                return Ok(result);
            }

            let tier = match to_move {
                Player::X => self.x_tier,
                Player::O => self.o_tier,
            };
            let mv = select_move(&board, tier, to_move, to_move.opponent(), rng)?;
            board = apply_move(&board, mv, to_move)?;
            to_move = to_move.opponent();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_plays_requested_number_of_games() {
        let mut rng = StdRng::seed_from_u64(4);
        let tally = Duel::new(DifficultyTier::Easy, DifficultyTier::Easy, 25)
            .run(&mut rng)
            .unwrap();
        assert_eq!(tally.games(), 25);
    }

    #[test]
    fn test_zero_games() {
        let mut rng = StdRng::seed_from_u64(4);
        let tally = Duel::new(DifficultyTier::Hard, DifficultyTier::Hard, 0)
            .run(&mut rng)
            .unwrap();
        assert_eq!(tally, Scoreboard::new());
    }
}
