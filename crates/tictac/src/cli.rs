//! Command-line interface for tictac.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tictac_engine::{Board, DifficultyTier, Move};

/// Tictac - tic-tac-toe engine with computer opponents
#[derive(Parser, Debug)]
#[command(name = "tictac")]
#[command(about = "Tic-tac-toe rules engine and computer opponents", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults apply when missing)
    #[arg(long, global = true, default_value = "tictac.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play computer tiers against each other
    Duel {
        /// Tier playing X
        #[arg(long, default_value = "hard")]
        x: DifficultyTier,

        /// Tier playing O
        #[arg(long, default_value = "hard")]
        o: DifficultyTier,

        /// Number of games
        #[arg(short, long, default_value = "100")]
        games: u32,

        /// Random seed (overrides config)
        #[arg(long)]
        seed: Option<u64>,

        /// Print the tally as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the move the computer would play on a board
    Suggest {
        /// Board in row-major notation, e.g. "X.O/.X./..."
        #[arg(short, long)]
        board: Board,

        /// Tier to ask (overrides config)
        #[arg(short, long)]
        tier: Option<DifficultyTier>,

        /// Random seed (overrides config)
        #[arg(long)]
        seed: Option<u64>,

        /// Print the suggestion as JSON
        #[arg(long)]
        json: bool,
    },

    /// Play a scripted game against the computer
    Play {
        /// Moves to submit in order, as "row,col" or a cell index 0-8
        #[arg(required = true, value_parser = parse_move)]
        moves: Vec<Move>,

        /// Tier of the computer (overrides config)
        #[arg(short, long)]
        tier: Option<DifficultyTier>,

        /// Random seed (overrides config)
        #[arg(long)]
        seed: Option<u64>,
    },
}

/// Parses "row,col" or a flat cell index.
pub fn parse_move(s: &str) -> Result<Move, String> {
    let s = s.trim();
    if let Some((row, col)) = s.split_once(',') {
        let row = row.trim().parse().map_err(|e| format!("Invalid row: {e}"))?;
        let col = col.trim().parse().map_err(|e| format!("Invalid col: {e}"))?;
        return Ok(Move::new(row, col));
    }

    let index: usize = s.parse().map_err(|e| format!("Invalid cell index: {}", e))?;
    Move::from_index(index)
        .ok_or_else(|| format!("Cell index {} is off the board", index))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_move_forms() {
        assert_eq!(parse_move("1,2"), Ok(Move::new(1, 2)));
        assert_eq!(parse_move(" 2 , 0 "), Ok(Move::new(2, 0)));
        assert_eq!(parse_move("4"), Ok(Move::new(1, 1)));
        assert!(parse_move("9").is_err());
        assert!(parse_move("a,b").is_err());
    }

    #[test]
    fn test_cli_parses_suggest() {
        let board = "X../.O./...";
        let args = ["tictac", "suggest", "--board", board, "--tier", "hard"];
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Command::Suggest { board, tier, .. } => {
                assert_eq!(board.to_string(), "X../.O./...");
                assert_eq!(tier, Some(DifficultyTier::Hard));
            }
            other => panic!("Unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_cli_parses_play_moves() {
        let cli = Cli::try_parse_from(["tictac", "play", "4", "0,0"]).unwrap();
        match cli.command {
            Command::Play { moves, .. } => {
                assert_eq!(moves, vec![Move::new(1, 1), Move::new(0, 0)]);
            }
            other => panic!("Unexpected command: {:?}", other),
        }
    }
}
