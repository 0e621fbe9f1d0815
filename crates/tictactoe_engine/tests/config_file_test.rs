//! Loading engine configuration from disk.

use std::io::Write;
use tictactoe_engine::{Difficulty, EngineConfig, Player, Session};

#[test]
fn test_load_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
difficulty = "easy"
automated_player = "X"
seed = 5
"#
    )
    .unwrap();

    let config = EngineConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.difficulty(), Difficulty::Easy);
    assert_eq!(config.automated_side(), Some(Player::X));

    let mut first = Session::new(&config).unwrap();
    let mut second = Session::new(&config).unwrap();
    assert_eq!(first.respond().unwrap(), second.respond().unwrap());
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = EngineConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_malformed_file_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "difficulty = [").unwrap();
    let err = EngineConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}
