//! Tic-tac-toe rules engine and computer opponents.
//!
//! The engine is pure: every operation is a function of a [`Board`] value
//! (plus the acting player, target cell, and an injected random source where
//! randomness is involved). Callers own the board and feed moves through
//! [`apply_move`]; computer moves come from [`select_move`].
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use tictac_engine::{Board, DifficultyTier, GameOutcome, Move, Player};
//! use tictac_engine::{apply_move, outcome, select_move};
//!
//! let empty = Board::new();
//! let board = apply_move(&empty, Move::new(1, 1), Player::X).unwrap();
//! let mut rng = StdRng::seed_from_u64(7);
//! let tier = DifficultyTier::Hard;
//! let reply = select_move(&board, tier, Player::O, Player::X, &mut rng).unwrap();
//! let board = apply_move(&board, reply, Player::O).unwrap();
//! assert_eq!(outcome(&board), GameOutcome::InProgress);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
pub mod rules;
pub mod strategy;
mod types;

pub use error::{InvalidMove, NoLegalMove, ParseBoardError};
pub use rules::{apply_move, is_full, is_legal, outcome, winner};
pub use strategy::{
    HeuristicStrategy, MinimaxStrategy, RandomStrategy, Strategy, select_move,
};
pub use types::{Board, Cell, DifficultyTier, GameOutcome, Move, Player};
