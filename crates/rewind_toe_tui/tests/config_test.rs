//! Tests for loading settings files.

use rewind_toe::MoveOrder;
use rewind_toe_tui::Settings;
use std::io::Write;
use std::path::PathBuf;

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "initial_order = \"descending\"\nlog_file = \"session.log\"\nlog_filter = \"rewind_toe=debug\"\nshow_cell_numbers = false"
    )
    .unwrap();

    let settings = Settings::load(Some(file.path())).unwrap();
    assert_eq!(*settings.initial_order(), MoveOrder::Descending);
    assert_eq!(settings.log_file(), &PathBuf::from("session.log"));
    assert_eq!(settings.log_filter(), "rewind_toe=debug");
    assert!(!*settings.show_cell_numbers());
}

#[test]
fn test_empty_file_gives_defaults() {
    let file = tempfile::NamedTempFile::new().unwrap();
    let settings = Settings::from_file(file.path()).unwrap();
    assert_eq!(settings, Settings::default());
}

#[test]
fn test_missing_explicit_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Settings::load(Some(dir.path().join("absent.toml").as_path())).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_malformed_file_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "show_cell_numbers = \"maybe\"").unwrap();
    let err = Settings::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
    assert!(err.file.ends_with("config.rs"));
}
