//! Tests for bot-against-bot matches.

use rand::SeedableRng;
use rand::rngs::StdRng;
use tictac::Duel;
use tictac_engine::{DifficultyTier, Player};

#[test]
fn test_hard_against_hard_always_draws() {
    let mut rng = StdRng::seed_from_u64(0);
    let tally = Duel::new(DifficultyTier::Hard, DifficultyTier::Hard, 3)
        .run(&mut rng)
        .expect("Duel");
    assert_eq!(*tally.draws(), 3);
}

#[test]
fn test_hard_never_loses_to_medium() {
    let mut rng = StdRng::seed_from_u64(8);
    let tally = Duel::new(DifficultyTier::Medium, DifficultyTier::Hard, 30)
        .run(&mut rng)
        .expect("Duel");
    assert_eq!(tally.wins(Player::X), 0);
    assert_eq!(tally.games(), 30);
}

#[test]
fn test_seeded_duel_is_reproducible() {
    let run = |seed| {
        let mut rng = StdRng::seed_from_u64(seed);
        Duel::new(DifficultyTier::Easy, DifficultyTier::Medium, 50)
            .run(&mut rng)
            .expect("Duel")
    };
    assert_eq!(run(12), run(12));
}
