use crate::input::{LogLines, open_lines};

use pretty_assertions::assert_eq;
use std::fs;
use std::io::Cursor;
use tempfile::tempdir;

fn collect(bytes: &[u8]) -> Vec<String> {
    LogLines::new(Cursor::new(bytes.to_vec()), "mem")
        .map(Result::unwrap)
        .collect()
}

#[test]
fn strips_lf_and_crlf_endings() {
    // Arrange
    let input = b"first\r\nsecond\nthird";

    // Act
    let lines = collect(input);

    // Assert
    assert_eq!(lines, vec!["first", "second", "third"]);
}

#[test]
fn keeps_blank_lines_for_the_caller() {
    // Arrange
    let input = b"a\n\n\nb\n";

    // Act
    let lines = collect(input);

    // Assert
    assert_eq!(lines, vec!["a", "", "", "b"]);
}

#[test]
fn replaces_invalid_utf8() {
    // Arrange
    let input = b"caf\xe9\n";

    // Act
    let lines = collect(input);

    // Assert
    assert_eq!(lines, vec!["caf\u{FFFD}"]);
}

#[test]
fn empty_input_yields_nothing() {
    assert!(collect(b"").is_empty());
}

#[test]
fn open_lines_reads_a_file() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("access.log");
    fs::write(&path, "x\ny\n").unwrap();

    // Act
    let lines = open_lines(&path).unwrap();
    let source = lines.path().to_path_buf();
    let collected: Vec<_> = lines.map(Result::unwrap).collect();

    // Assert
    assert_eq!(source, path);
    assert_eq!(collected, vec!["x", "y"]);
}
