//! Tests for TOML configuration loading.

use std::io::Write;
use tictactoe_bot::{BotConfig, Mark};

#[test]
fn test_load_full_config() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "player_mark = \"O\"\nseed = 42").unwrap();

    let config = BotConfig::from_file(file.path()).unwrap();
    assert_eq!(config.player_mark(), &Mark::O);
    assert_eq!(config.seed(), &Some(42));
    assert_eq!(config.marks().opponent(), Mark::X);
}

#[test]
fn test_missing_fields_use_defaults() {
    let file = tempfile::NamedTempFile::new().unwrap();
    let config = BotConfig::from_file(file.path()).unwrap();
    assert_eq!(config, BotConfig::default());
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = BotConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config.player_mark(), &Mark::X);
    assert_eq!(config.seed(), &None);
}

#[test]
fn test_bad_toml_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "player_mark = \"Z\"").unwrap();

    let err = BotConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_rendered_config_loads_back() {
    let config = BotConfig::default().with_player_mark(Mark::O).with_seed(9);
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bot.toml");
    std::fs::write(&path, config.to_toml().unwrap()).unwrap();
    assert_eq!(BotConfig::from_file(&path).unwrap(), config);
}
