//! A series of games on one board, with optional computer opponent.

use super::config::{GameConfig, GameMode};
use super::error::SessionError;
use super::scoreboard::Scoreboard;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use tictac_engine::{
    Board, DifficultyTier, GameOutcome, Move, Player, apply_move, outcome, select_move,
};
use tracing::{debug, info, instrument};

/// What happened during one call to [`Session::play`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    /// The submitted move.
    pub played: Move,
    /// The computer's answer, if it moved.
    pub reply: Option<Move>,
    /// Outcome after both moves.
    pub outcome: GameOutcome,
}

/// Game session: the single owner of the board.
///
/// X always moves first and turns alternate, so whose turn it is follows
/// from the board itself. Finished games are added to the scoreboard once;
/// further moves are refused until [`Session::reset`].
#[derive(Debug, Clone)]
pub struct Session {
    board: Board,
    mode: GameMode,
    tier: DifficultyTier,
    human: Player,
    last_move: Option<Move>,
    scoreboard: Scoreboard,
    rng: StdRng,
}

impl Session {
    /// Creates a session and opens the first game.
    ///
    /// If the computer holds X it makes the opening move here.
    #[instrument(skip(config), fields(mode = %config.mode(), tier = %config.tier()))]
    pub fn new(config: &GameConfig) -> Result<Self, SessionError> {
        let rng = match config.seed() {
            Some(seed) => StdRng::seed_from_u64(*seed),
            None => StdRng::from_entropy(),
        };

        let mut session = Self {
            board: Board::new(),
            mode: *config.mode(),
            tier: *config.tier(),
            human: *config.human_mark(),
            last_move: None,
            scoreboard: Scoreboard::new(),
            rng,
        };
        session.open()?;

        info!(human = %session.human, "Session created");
        Ok(session)
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the outcome of the current game.
    pub fn outcome(&self) -> GameOutcome {
        outcome(&self.board)
    }

    /// Returns the player to move.
    pub fn to_move(&self) -> Player {
        self.board.next_player()
    }

    /// Returns the most recent move of the current game.
    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    /// Returns the running tally.
    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    /// Returns the session mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Returns the computer tier.
    pub fn tier(&self) -> DifficultyTier {
        self.tier
    }

    /// Returns the human's mark in `vs_computer` mode.
    pub fn human(&self) -> Player {
        self.human
    }

    /// Changes the computer tier from its next move on.
    #[instrument(skip(self))]
    pub fn set_tier(&mut self, tier: DifficultyTier) {
        self.tier = tier;
    }

    /// Plays a move for the side on turn.
    ///
    /// Against the computer only the human's moves are accepted, and the
    /// computer answers straight away if the game is still open.
    ///
    /// # Errors
    ///
    /// - [`SessionError::GameOver`] once the game has finished
    /// - [`SessionError::NotYourTurn`] when the computer is on turn
    /// - [`SessionError::InvalidMove`] for an occupied or off-board cell
    #[instrument(skip(self), fields(board = %self.board))]
    pub fn play(&mut self, mv: Move) -> Result<Turn, SessionError> {
        self.ensure_open()?;
        let player = self.to_move();
        if self.mode == GameMode::VsComputer && player != self.human {
            return Err(SessionError::NotYourTurn(player));
        }

        self.place(mv, player)?;

        let reply = if self.mode == GameMode::VsComputer && !self.outcome().is_terminal() {
            Some(self.computer_move()?)
        } else {
            None
        };

        Ok(Turn {
            played: mv,
            reply,
            outcome: self.outcome(),
        })
    }

    /// Lets the computer move for the side on turn.
    ///
    /// In `hot_seat` mode this plays for whichever side is to move.
    ///
    /// # Errors
    ///
    /// - [`SessionError::GameOver`] once the game has finished
    /// - [`SessionError::NotYourTurn`] when the human is on turn against
    ///   the computer
    #[instrument(skip(self), fields(tier = %self.tier))]
    pub fn computer_move(&mut self) -> Result<Move, SessionError> {
        self.ensure_open()?;
        let player = self.to_move();
        if self.mode == GameMode::VsComputer && player == self.human {
            return Err(SessionError::NotYourTurn(player));
        }

        let mv = select_move(
            &self.board,
            self.tier,
            player,
            player.opponent(),
            &mut self.rng,
        )?;
        self.place(mv, player)?;
        Ok(mv)
    }

    /// Starts a new game. The scoreboard is kept.
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> Result<(), SessionError> {
        self.board = Board::new();
        self.last_move = None;
        self.open()
    }

    /// Lets the computer open when it plays X.
    fn open(&mut self) -> Result<(), SessionError> {
        if self.mode == GameMode::VsComputer && self.human != Player::X {
            self.computer_move()?;
        }
        Ok(())
    }

    fn ensure_open(&self) -> Result<(), SessionError> {
        if self.outcome().is_terminal() {
            return Err(SessionError::GameOver);
        }
        Ok(())
    }

    /// Applies a move and records the game if it just finished.
    fn place(&mut self, mv: Move, player: Player) -> Result<(), SessionError> {
        self.board = apply_move(&self.board, mv, player)?;
        self.last_move = Some(mv);
        debug!(%player, %mv, board = %self.board, "Move applied");

        let result = self.outcome();
        if result.is_terminal() {
            info!(%result, "Game finished");
            self.scoreboard.record(result);
        }
        Ok(())
    }
}
