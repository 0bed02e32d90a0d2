use crate::conf::{ConfigError, discover, resolve_glob, resolve_sources};

use std::fs;
use std::path::Path;
use tempfile::tempdir;

#[test]
fn discover_returns_sorted_matches() {
    // Arrange
    let dir = tempdir().unwrap();
    let root = dir.path();

    fs::write(root.join("access.log.2.gz"), "").unwrap();
    fs::write(root.join("access.log.1.gz"), "").unwrap();
    fs::write(root.join("error.log"), "").unwrap();

    // Act
    let result = discover(root, "access.log*").unwrap();

    // Assert
    assert_eq!(
        result,
        vec![root.join("access.log.1.gz"), root.join("access.log.2.gz")]
    );
}

#[test]
fn discover_filters_out_directories() {
    // Arrange
    let dir = tempdir().unwrap();
    let root = dir.path();

    fs::create_dir(root.join("access.log")).unwrap();

    // Act
    let result = discover(root, "*.log").unwrap();

    // Assert
    assert!(result.is_empty());
}

#[test]
fn discover_returns_error_for_invalid_glob() {
    // Arrange
    let dir = tempdir().unwrap();

    // Act
    let err = discover(dir.path(), "[").unwrap_err();

    // Assert
    match err {
        ConfigError::Glob { pattern, .. } => assert!(pattern.contains('[')),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn resolve_glob_keeps_absolute_patterns() {
    // Arrange
    let root = Path::new("/srv/logdash");

    // Act
    let relative = resolve_glob(root, "logs/*.log");
    let absolute = resolve_glob(root, "/var/log/nginx/access.log");

    // Assert
    assert_eq!(relative, "/srv/logdash/logs/*.log");
    assert_eq!(absolute, "/var/log/nginx/access.log");
}

#[test]
fn resolve_sources_keeps_pattern_order_and_drops_duplicates() {
    // Arrange
    let dir = tempdir().unwrap();
    let root = dir.path();

    fs::write(root.join("access.log"), "").unwrap();
    fs::write(root.join("access.log.1.gz"), "").unwrap();

    let patterns = vec!["access.log".to_string(), "access.log*".to_string()];

    // Act
    let sources = resolve_sources(root, &patterns).unwrap();

    // Assert
    assert_eq!(
        sources,
        vec![root.join("access.log"), root.join("access.log.1.gz")]
    );
}

#[test]
fn resolve_sources_fails_when_nothing_matches() {
    // Arrange
    let dir = tempdir().unwrap();
    let patterns = vec!["missing.log".to_string(), "*.gz".to_string()];

    // Act
    let err = resolve_sources(dir.path(), &patterns).unwrap_err();

    // Assert
    match err {
        ConfigError::NoSources { patterns } => assert_eq!(patterns.len(), 2),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn resolve_sources_skips_patterns_without_matches() {
    // Arrange
    let dir = tempdir().unwrap();
    let root = dir.path();
    fs::write(root.join("access.log"), "").unwrap();

    let patterns = vec!["rotated/*.gz".to_string(), "access.log".to_string()];

    // Act
    let sources = resolve_sources(root, &patterns).unwrap();

    // Assert
    assert_eq!(sources, vec![root.join("access.log")]);
}
