use crate::aggregate::TopKLimits;
use crate::conf::{ConfigError, LogdashConfig, load_config, load_optional_config};

use pretty_assertions::assert_eq;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

#[test]
fn load_config_reads_every_section() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("logdash.hcl");
    fs::write(
        &path,
        r#"
input  = { paths = ["nginx/access.log"] }
output = { dir = "out", pretty = false }
watch  = { interval_secs = 5 }
limits = { ips = 3, methods = 2 }
"#,
    )
    .unwrap();

    // Act
    let loaded = load_config(&path).unwrap();

    // Assert
    let config = loaded.config;
    assert_eq!(config.input.paths, vec!["nginx/access.log".to_string()]);
    assert_eq!(config.output.dir, PathBuf::from("out"));
    assert!(!config.output.pretty);
    assert_eq!(config.watch.interval_secs, 5);
    assert_eq!(
        config.limits,
        TopKLimits {
            ips: 3,
            methods: 2,
            ..TopKLimits::default()
        }
    );
    assert_eq!(loaded.root, dir.path().to_path_buf());
    assert_eq!(loaded.source, Some(path));
}

#[test]
fn empty_file_yields_defaults() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("logdash.hcl");
    fs::write(&path, "").unwrap();

    // Act
    let loaded = load_config(&path).unwrap();

    // Assert
    assert_eq!(loaded.config, LogdashConfig::default());
}

#[test]
fn missing_file_is_an_error_when_explicit() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("nope.hcl");

    // Act
    let err = load_config(&path).unwrap_err();

    // Assert
    assert!(matches!(err, ConfigError::ReadFile { .. }));
}

#[test]
fn missing_optional_file_falls_back_to_defaults() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("logdash.hcl");

    // Act
    let loaded = load_optional_config(&path).unwrap();

    // Assert
    assert_eq!(loaded.config, LogdashConfig::default());
    assert_eq!(loaded.source, None);
    assert_eq!(loaded.root, dir.path().to_path_buf());
}

#[test]
fn unknown_fields_are_rejected() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("logdash.hcl");
    fs::write(&path, "output = { directory = \"out\" }\n").unwrap();

    // Act
    let err = load_config(&path).unwrap_err();

    // Assert
    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn zero_limit_is_invalid() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("logdash.hcl");
    fs::write(&path, "limits = { referrers = 0 }\n").unwrap();

    // Act
    let err = load_config(&path).unwrap_err();

    // Assert
    match &err {
        ConfigError::Invalid { field, .. } => assert_eq!(field, "limits.referrers"),
        other => panic!("unexpected error: {:?}", other),
    }
    assert!(err.hint().is_some());
}

#[test]
fn zero_interval_is_invalid() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("logdash.hcl");
    fs::write(&path, "watch = { interval_secs = 0 }\n").unwrap();

    // Act
    let err = load_config(&path).unwrap_err();

    // Assert
    match err {
        ConfigError::Invalid { field, .. } => assert_eq!(field, "watch.interval_secs"),
        other => panic!("unexpected error: {:?}", other),
    }
}
