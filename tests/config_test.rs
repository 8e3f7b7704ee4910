//! Tests for loading the TOML configuration.

use std::io::Write;
use std::path::PathBuf;

use tempfile::{NamedTempFile, TempDir};

use conference_bingo::BingoConfig;

/// Writes `contents` to a temporary config file, returns the file handle
/// (must stay in scope to keep the file alive).
fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write config");
    file
}

#[test]
fn test_empty_file_gives_defaults() {
    let file = write_config("");
    let config = BingoConfig::from_file(file.path()).expect("Load failed");
    assert_eq!(config, BingoConfig::default());
    assert_eq!(config.locked_cells(), &vec![13]);
    assert_eq!(config.data_dir(), &PathBuf::from(".conference_bingo"));
    assert!(!*config.ephemeral());
}

#[test]
fn test_partial_file_overrides_only_its_fields() {
    let file = write_config("ephemeral = true\nlocked_cells = [1, 25]\n");
    let config = BingoConfig::load_or_default(file.path()).expect("Load failed");
    assert!(*config.ephemeral());
    assert_eq!(config.locked_cells(), &vec![1, 25]);
    assert_eq!(config.data_dir(), BingoConfig::default().data_dir());
}

#[test]
fn test_data_dir_from_file() {
    let file = write_config("data_dir = \"/tmp/bingo-state\"\n");
    let config = BingoConfig::from_file(file.path()).expect("Load failed");
    assert_eq!(config.data_dir(), &PathBuf::from("/tmp/bingo-state"));
    assert_eq!(config.locked_cells(), &vec![13]);
}

#[test]
fn test_missing_file_gives_defaults() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("absent.toml");
    let config = BingoConfig::load_or_default(&path).expect("Missing file should not fail");
    assert_eq!(config, BingoConfig::default());
}

#[test]
fn test_missing_file_is_error_for_from_file() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    assert!(BingoConfig::from_file(dir.path().join("absent.toml")).is_err());
}

#[test]
fn test_invalid_toml_is_error() {
    let file = write_config("locked_cells = [13\n");
    let err = BingoConfig::load_or_default(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_wrong_field_type_is_error() {
    let file = write_config("ephemeral = \"yes\"\n");
    assert!(BingoConfig::from_file(file.path()).is_err());
}
