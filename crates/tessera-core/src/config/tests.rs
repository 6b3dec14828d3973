use std::fs;

use super::*;

#[test]
fn default_config_has_expected_values() {
    let mut config = Config::default();
    config.validate();

    assert!(!config.logging.enabled);
    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.max_file_mb, 10);
}

#[test]
fn partial_toml_uses_defaults_for_missing_fields() {
    // Arrange
    let toml_str = "[logging]\nenabled = true\n";

    // Act
    let config = parse(toml_str).unwrap();

    // Assert
    assert!(config.logging.enabled);
    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.max_file_mb, 10);
}

#[test]
fn empty_toml_is_default() {
    let config = parse("").unwrap();
    assert!(!config.logging.enabled);
}

#[test]
fn invalid_toml_is_an_error() {
    // Arrange
    let toml_str = "[logging\nenabled = ";

    // Act
    let result = parse(toml_str);

    // Assert
    assert!(result.is_err());
}

#[test]
fn wrong_type_is_an_error() {
    assert!(parse("[logging]\nmax_file_mb = \"big\"\n").is_err());
}

#[test]
fn validate_clamps_and_normalises() {
    // Arrange
    let mut config = Config {
        logging: LogConfig {
            enabled: true,
            level: "WARN".into(),
            max_file_mb: 50_000,
        },
    };

    // Act
    config.validate();

    // Assert
    assert_eq!(config.logging.max_file_mb, 1024);
    assert_eq!(config.logging.level, "warn");
}

#[test]
fn validate_replaces_unknown_level_with_info() {
    let mut config = parse("[logging]\nlevel = \"chatty\"\n").unwrap();
    config.validate();
    assert_eq!(config.logging.level, "info");
}

#[test]
fn try_load_from_prefixes_errors_with_path() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "not = [valid").unwrap();

    // Act
    let err = try_load_from(&path).unwrap_err();

    // Assert
    assert!(err.starts_with(&path.display().to_string()));
}

#[test]
fn load_from_missing_file_returns_defaults() {
    let dir = tempfile::tempdir().unwrap();

    let config = load_from(&dir.path().join("absent.toml"));

    assert!(!config.logging.enabled);
}

#[test]
fn load_from_invalid_file_returns_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[logging]\nenabled = maybe\n").unwrap();

    let config = load_from(&path);

    assert!(!config.logging.enabled);
}

#[test]
fn load_from_directory_warns_and_returns_defaults() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("config.toml")).unwrap();

    // Act
    let config = load_from(&dir.path().join("config.toml"));

    // Assert
    assert!(!config.logging.enabled);
    assert_eq!(config.logging.max_file_mb, 10);
}

#[test]
fn load_from_reads_valid_file() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        "[logging]\nenabled = true\nlevel = \"debug\"\nmax_file_mb = 5\n",
    )
    .unwrap();

    // Act
    let config = load_from(&path);

    // Assert
    assert!(config.logging.enabled);
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.max_file_mb, 5);
}

#[test]
fn config_path_ends_with_config_toml() {
    if let Some(path) = config_path() {
        assert!(path.ends_with(".config/tessera/config.toml"));
    }
}
