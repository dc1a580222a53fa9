//! Tests for the computer opponents.

use rand::SeedableRng;
use rand::rngs::StdRng;
use strum::IntoEnumIterator;
use tictac_engine::{
    Board, DifficultyTier, GameOutcome, Move, Player, apply_move, outcome, select_move,
};

/// Plays a full game with each side at a fixed tier.
fn play_out(x_tier: DifficultyTier, o_tier: DifficultyTier, rng: &mut StdRng) -> GameOutcome {
    let mut board = Board::new();
    let mut to_move = Player::X;
    while !outcome(&board).is_terminal() {
        let tier = match to_move {
            Player::X => x_tier,
            Player::O => o_tier,
        };
        let mv = select_move(&board, tier, to_move, to_move.opponent(), rng)
            .expect("Strategy found a move");
        board = apply_move(&board, mv, to_move).expect("Legal move");
        to_move = to_move.opponent();
    }
    outcome(&board)
}

/// Lets the other side try every move at every turn against the hard tier.
fn exhaust_against_hard(board: Board, to_move: Player, computer: Player, rng: &mut StdRng) {
    match outcome(&board) {
        GameOutcome::Win(player) => {
            assert_eq!(player, computer, "Hard tier lost on {}", board);
            return;
        }
        GameOutcome::Draw => return,
        GameOutcome::InProgress => {}
    }

    if to_move == computer {
        let opponent = computer.opponent();
        let mv = select_move(&board, DifficultyTier::Hard, computer, opponent, rng)
            .expect("Move");
        let next = apply_move(&board, mv, computer).expect("Legal move");
        exhaust_against_hard(next, to_move.opponent(), computer, rng);
    } else {
        let moves: Vec<Move> = board.empty_cells().collect();
        for mv in moves {
            let next = apply_move(&board, mv, to_move).expect("Legal move");
            exhaust_against_hard(next, to_move.opponent(), computer, rng);
        }
    }
}

#[test]
fn test_hard_against_hard_draws() {
    let mut rng = StdRng::seed_from_u64(0);
    assert_eq!(
        play_out(DifficultyTier::Hard, DifficultyTier::Hard, &mut rng),
        GameOutcome::Draw
    );
}

#[test]
fn test_hard_never_loses_as_o() {
    let mut rng = StdRng::seed_from_u64(0);
    exhaust_against_hard(Board::new(), Player::X, Player::O, &mut rng);
}

#[test]
fn test_hard_never_loses_as_x() {
    let mut rng = StdRng::seed_from_u64(0);
    exhaust_against_hard(Board::new(), Player::X, Player::X, &mut rng);
}

#[test]
fn test_hard_is_deterministic() {
    let board: Board = "X...O....".parse().expect("Valid board");
    let mut a = StdRng::seed_from_u64(1);
    let mut b = StdRng::seed_from_u64(2);
    assert_eq!(
        select_move(&board, DifficultyTier::Hard, Player::X, Player::O, &mut a),
        select_move(&board, DifficultyTier::Hard, Player::X, Player::O, &mut b),
    );
}

#[test]
fn test_hard_never_loses_to_easy() {
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..20 {
        let result = play_out(DifficultyTier::Hard, DifficultyTier::Easy, &mut rng);
        assert_ne!(result, GameOutcome::Win(Player::O));
    }
}

#[test]
fn test_medium_takes_earliest_win() {
    // X to move with two winning cells: (0, 2) and (2, 0).
    let board: Board = "XX./XOO/.O.".parse().expect("Valid board");
    let mut rng = StdRng::seed_from_u64(0);
    let mv = select_move(&board, DifficultyTier::Medium, Player::X, Player::O, &mut rng);
    assert_eq!(mv, Ok(Move::new(0, 2)));
}

#[test]
fn test_seeded_tiers_are_reproducible() {
    for tier in DifficultyTier::iter() {
        let game = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut board = Board::new();
            let mut to_move = Player::X;
            let mut moves = Vec::new();
            while !outcome(&board).is_terminal() {
                let mv = select_move(&board, tier, to_move, to_move.opponent(), &mut rng)
                    .expect("Move");
                board = apply_move(&board, mv, to_move).expect("Legal move");
                moves.push(mv);
                to_move = to_move.opponent();
            }
            moves
        };
        assert_eq!(game(17), game(17), "tier {}", tier);
    }
}
