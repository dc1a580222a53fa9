//! Tests for loading game configuration files.

use std::fs;
use tempfile::TempDir;

use tictac::{GameConfig, GameMode};
use tictac_engine::{DifficultyTier, Player};

#[test]
fn test_from_file_reads_values() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("tictac.toml");
    fs::write(
        &path,
        r#"
mode = "vs_computer"
tier = "easy"
human_mark = "O"
seed = 99
"#,
    )
    .expect("Failed to write TOML");

    let config = GameConfig::from_file(&path).expect("Load failed");
    assert_eq!(config.mode(), &GameMode::VsComputer);
    assert_eq!(config.tier(), &DifficultyTier::Easy);
    assert_eq!(config.human_mark(), &Player::O);
    assert_eq!(config.seed(), &Some(99));
}

#[test]
fn test_missing_file_uses_defaults() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("absent.toml");
    let config = GameConfig::load_or_default(&path).expect("Defaults");
    assert_eq!(config, GameConfig::default());
}

#[test]
fn test_missing_file_is_error_for_from_file() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("absent.toml");
    let err = GameConfig::from_file(&path).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_malformed_file_is_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("bad.toml");
    let toml = "tier = \"impossible\"\n";
    fs::write(&path, toml).expect("Failed to write TOML");

    let err = GameConfig::load_or_default(&path).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_partial_file_fills_defaults() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("partial.toml");
    let toml = "tier = \"hard\"\n";
    fs::write(&path, toml).expect("Failed to write TOML");

    let config = GameConfig::from_file(&path).expect("Load failed");
    assert_eq!(config.tier(), &DifficultyTier::Hard);
    assert_eq!(config.mode(), &GameMode::VsComputer);
    assert_eq!(config.human_mark(), &Player::X);
    assert_eq!(config.seed(), &None);
}
