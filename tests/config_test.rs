//! Loading configuration from disk.

use std::io::Write;
use std::path::Path;
use strictly_minimax::AppConfig;
use strictly_tictactoe::Mark;

#[test]
fn test_loads_toml_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
[game]
first_player = "O"
human_side = "X"

[computer]
thinking_delay_ms = 250

[logging]
filter = "debug"
file = "game.log"
"#
    )
    .unwrap();

    let config = AppConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.game().first_player(), Mark::O);
    assert_eq!(*config.game().human_side(), Some(Mark::X));
    assert_eq!(*config.computer().thinking_delay_ms(), 250);
    assert_eq!(config.logging().filter(), "debug");
    assert_eq!(config.logging().file(), Path::new("game.log"));
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = AppConfig::load_or_default(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, AppConfig::default());
}

#[test]
fn test_invalid_toml_is_rejected() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[game\nfirst_player = ").unwrap();

    let err = AppConfig::load_or_default(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_out_of_range_delay_is_rejected() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[computer]\nthinking_delay_ms = 60000").unwrap();

    assert!(AppConfig::from_file(file.path()).is_err());
}

#[test]
fn test_unknown_mark_is_rejected() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[game]\nfirst_player = \"Z\"").unwrap();

    assert!(AppConfig::from_file(file.path()).is_err());
}
