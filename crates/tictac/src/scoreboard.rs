//! Running win/loss/draw tally.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tictac_engine::{GameOutcome, Player};
use tracing::{debug, instrument};

/// Tally of finished games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Scoreboard {
    /// Games won by X.
    x_wins: u32,
    /// Games won by O.
    o_wins: u32,
    /// Drawn games.
    draws: u32,
}

impl Scoreboard {
    /// Creates an empty scoreboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a finished game. In-progress outcomes are ignored.
    #[instrument(skip(self))]
    pub fn record(&mut self, outcome: GameOutcome) {
        match outcome {
            GameOutcome::Win(Player::X) => self.x_wins += 1,
            GameOutcome::Win(Player::O) => self.o_wins += 1,
            GameOutcome::Draw => self.draws += 1,
            GameOutcome::InProgress => return,
        }
        debug!(tally = %self, "Tally updated");
    }

    /// Games won by `player`.
    pub fn wins(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x_wins,
            Player::O => self.o_wins,
        }
    }

    /// Games lost by `player`.
    pub fn losses(&self, player: Player) -> u32 {
        self.wins(player.opponent())
    }

    /// Total finished games.
    pub fn games(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }
}

impl std::fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "X wins: {}, O wins: {}, draws: {}",
            self.x_wins, self.o_wins, self.draws
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_each_outcome() {
        let mut board = Scoreboard::new();
        board.record(GameOutcome::Win(Player::X));
        board.record(GameOutcome::Win(Player::X));
        board.record(GameOutcome::Win(Player::O));
        board.record(GameOutcome::Draw);
        board.record(GameOutcome::InProgress);

        assert_eq!(board.games(), 4);
        assert_eq!(board.wins(Player::X), 2);
        assert_eq!(board.losses(Player::X), 1);
        assert_eq!(*board.draws(), 1);
    }
}
