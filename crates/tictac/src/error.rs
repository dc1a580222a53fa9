//! Session error types.

use tictac_engine::{InvalidMove, NoLegalMove, Player};

/// Error raised by a [`crate::Session`] operation.
///
/// A failed operation leaves the session exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum SessionError {
    /// The move cannot be placed on the board.
    #[display("Invalid move: {}", _0)]
    InvalidMove(InvalidMove),

    /// The computer was asked to move with no empty cell left.
    #[display("{}", _0)]
    NoLegalMove(NoLegalMove),

    /// The current game has finished; reset to play again.
    #[display("Game is already over")]
    GameOver,

    /// The move was submitted for the side that is not on turn.
    #[display("It's not {}'s turn", _0)]
    NotYourTurn(Player),
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::InvalidMove(err) => Some(err),
            SessionError::NoLegalMove(err) => Some(err),
            SessionError::GameOver | SessionError::NotYourTurn(_) => None,
        }
    }
}

impl From<InvalidMove> for SessionError {
    fn from(err: InvalidMove) -> Self {
        SessionError::InvalidMove(err)
    }
}

impl From<NoLegalMove> for SessionError {
    fn from(err: NoLegalMove) -> Self {
        SessionError::NoLegalMove(err)
    }
}
