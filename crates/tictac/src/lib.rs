//! Tic-tac-toe sessions on top of [`tictac_engine`].
//!
//! # Architecture
//!
//! - **Session**: owns the board for one series of games, enforces turn
//!   order, lets the computer reply, and keeps the running tally
//! - **Duel**: plays bot against bot for a number of games
//! - **Config**: TOML-backed defaults for mode, tier, marks, and seed
//!
//! # Example
//!
//! ```
//! use tictac::{GameConfig, Session};
//! use tictac_engine::Move;
//!
//! # fn example() -> Result<(), tictac::SessionError> {
//! let mut session = Session::new(&GameConfig::default().with_seed(1))?;
//! let turn = session.play(Move::new(1, 1))?;
//! assert!(turn.reply.is_some());
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod duel;
mod error;
mod scoreboard;
mod session;

pub use config::{ConfigError, GameConfig, GameMode};
pub use duel::Duel;
pub use error::SessionError;
pub use scoreboard::Scoreboard;
pub use session::{Session, Turn};
