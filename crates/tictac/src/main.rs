//! Tictac - command-line front end.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use std::path::Path;
use tictac::{Duel, GameConfig, GameMode, Session, SessionError};
use tictac_engine::{
    Board, DifficultyTier, GameOutcome, MinimaxStrategy, Move, Player, outcome, select_move,
};
use tracing::{info, instrument, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = load_config(&cli.config)?;

    match cli.command {
        Command::Duel {
            x,
            o,
            games,
            seed,
            json,
        } => run_duel(&config, x, o, games, seed, json),
        Command::Suggest {
            board,
            tier,
            seed,
            json,
        } => run_suggest(&config, board, tier, seed, json),
        Command::Play { moves, tier, seed } => run_play(config, moves, tier, seed),
    }
}

fn load_config(path: &Path) -> Result<GameConfig> {
    let config = GameConfig::load_or_default(path)?;
    info!(?config, "Configuration ready");
    Ok(config)
}

fn make_rng(config: &GameConfig, seed: Option<u64>) -> StdRng {
    match seed.or(*config.seed()) {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Run a bot-against-bot match
#[instrument(skip(config))]
fn run_duel(
    config: &GameConfig,
    x: DifficultyTier,
    o: DifficultyTier,
    games: u32,
    seed: Option<u64>,
    json: bool,
) -> Result<()> {
    let mut rng = make_rng(config, seed);
    let scoreboard = Duel::new(x, o, games).run(&mut rng)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&scoreboard)?);
    } else {
        println!("{} (X) vs {} (O), {} games", x, o, games);
        println!("{}", scoreboard);
    }
    Ok(())
}

/// Suggested move for one board.
#[derive(Debug, Serialize)]
struct Suggestion {
    board: String,
    to_move: Player,
    tier: DifficultyTier,
    outcome: GameOutcome,
    suggested: Option<Move>,
    scores: Option<Vec<(Move, i32)>>,
}

/// Show the computer's choice for a board
#[instrument(skip(config, board), fields(board = %board))]
fn run_suggest(
    config: &GameConfig,
    board: Board,
    tier: Option<DifficultyTier>,
    seed: Option<u64>,
    json: bool,
) -> Result<()> {
    let tier = tier.unwrap_or(*config.tier());
    let to_move = board.next_player();
    let current = outcome(&board);

    let suggested = if current.is_terminal() {
        warn!(outcome = %current, "Board is already finished");
        None
    } else {
        let mut rng = make_rng(config, seed);
        Some(select_move(&board, tier, to_move, to_move.opponent(), &mut rng)?)
    };

    let scores = if tier == DifficultyTier::Hard && suggested.is_some() {
        let opponent = to_move.opponent();
        Some(MinimaxStrategy.score_moves(&board, to_move, opponent))
    } else {
        None
    };

    let suggestion = Suggestion {
        board: board.to_string(),
        to_move,
        tier,
        outcome: current,
        suggested,
        scores,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&suggestion)?);
        return Ok(());
    }

    println!("{} ({} to move): {}", suggestion.board, to_move, current);
    match suggestion.suggested {
        Some(mv) => println!("{} tier plays {}", tier, mv),
        None => println!("No move to suggest"),
    }
    if let Some(scores) = &suggestion.scores {
        for (mv, score) in scores {
            println!("  {} -> {}", mv, score);
        }
    }
    Ok(())
}

/// Play a scripted game against the computer
#[instrument(skip(config))]
fn run_play(
    config: GameConfig,
    moves: Vec<Move>,
    tier: Option<DifficultyTier>,
    seed: Option<u64>,
) -> Result<()> {
    let mut config = config.with_mode(GameMode::VsComputer);
    if let Some(tier) = tier {
        config = config.with_tier(tier);
    }
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }

    let mut session = Session::new(&config)?;
    if let Some(opening) = session.last_move() {
        println!("Computer opens at {}", opening);
    }

    let accepted = play_script(&mut session, &moves);
    info!(accepted, submitted = moves.len(), "Script finished");

    println!("{}", session.board());
    println!("{}", session.outcome());
    println!("{}", session.scoreboard());
    Ok(())
}

/// Feeds scripted moves to the session until the game ends.
///
/// A rejected move is logged and skipped. Returns the number of moves the
/// session accepted.
fn play_script(session: &mut Session, moves: &[Move]) -> usize {
    let mut accepted = 0;
    for &mv in moves {
        let turn = match session.play(mv) {
            Ok(turn) => turn,
            Err(SessionError::GameOver) => break,
            Err(err) => {
                warn!(%mv, error = %err, "Move rejected");
                continue;
            }
        };

        accepted += 1;
        match turn.reply {
            Some(reply) => println!("You play {}, computer answers {}", mv, reply),
            None => println!("You play {}", mv),
        }
        if turn.outcome.is_terminal() {
            break;
        }
    }
    accepted
}
