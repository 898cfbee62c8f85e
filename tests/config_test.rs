//! Tests for TOML configuration.

use five_in_a_row::GomokuConfig;
use std::io::Write;

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_defaults() {
    let config = GomokuConfig::default();
    assert_eq!(*config.board_size(), 15);
    assert!(!*config.x_on_even());
    assert_eq!(config.log_filter(), "info");
}

#[test]
fn test_from_file() {
    let file = write_config("board_size = 19\nx_on_even = true\nlog_filter = \"debug\"\n");
    let config = GomokuConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.board_size(), 19);
    assert!(*config.x_on_even());
    assert_eq!(config.log_filter(), "debug");
}

#[test]
fn test_partial_file_uses_defaults() {
    let file = write_config("x_on_even = true\n");
    let config = GomokuConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.board_size(), 15);
    assert!(*config.x_on_even());
}

#[test]
fn test_zero_board_size_rejected() {
    let file = write_config("board_size = 0\n");
    let err = GomokuConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("board_size"));
}

#[test]
fn test_invalid_toml() {
    let file = write_config("board_size = \"big\"\n");
    let err = GomokuConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_explicit_missing_path_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.toml");
    assert!(GomokuConfig::load(Some(path.as_path())).is_err());
}
