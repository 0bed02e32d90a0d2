use crate::aggregate::TopKLimits;
use crate::pipeline::analyze_lines;
use crate::report::{ARTIFACT_FILES, write_artifacts, write_artifacts_at};

use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use serde_json::Value;
use std::fs;
use tempfile::tempdir;

const LINE: &str = r#"192.168.1.5 - - [10/Oct/2023:13:55:36 -0700] "GET /app.js HTTP/1.1" 200 2048 "-" "Mozilla/5.0""#;

#[test]
fn writes_every_artifact_into_a_new_directory() {
    // Arrange
    let dir = tempdir().unwrap();
    let out = dir.path().join("dashboard/data");
    let (agg, _) = analyze_lines([LINE]);
    let stats = agg.snapshot(&TopKLimits::default());

    // Act
    let written = write_artifacts(&stats, &out, true).unwrap();

    // Assert
    let expected: Vec<_> = ARTIFACT_FILES.iter().map(|f| out.join(f)).collect();
    assert_eq!(written, expected);
    for path in &written {
        let body = fs::read_to_string(path).unwrap();
        serde_json::from_str::<Value>(&body).unwrap();
    }
}

#[test]
fn leaves_no_temporary_files_behind() {
    // Arrange
    let dir = tempdir().unwrap();
    let (agg, _) = analyze_lines([LINE]);
    let stats = agg.snapshot(&TopKLimits::default());

    // Act
    write_artifacts(&stats, dir.path(), false).unwrap();

    // Assert
    let count = fs::read_dir(dir.path()).unwrap().count();
    assert_eq!(count, ARTIFACT_FILES.len());
}

#[test]
fn rewriting_replaces_previous_content() {
    // Arrange
    let dir = tempdir().unwrap();
    let at = Utc.with_ymd_and_hms(2024, 5, 6, 7, 8, 9).unwrap();

    let (first, _) = analyze_lines([LINE]);
    let (second, _) = analyze_lines([LINE, LINE, LINE]);

    // Act
    write_artifacts_at(&first.snapshot(&TopKLimits::default()), dir.path(), true, at).unwrap();
    write_artifacts_at(&second.snapshot(&TopKLimits::default()), dir.path(), true, at).unwrap();

    // Assert
    let summary: Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join("summary.json")).unwrap())
            .unwrap();
    assert_eq!(summary["total_requests"], 3);
    assert_eq!(summary["generated_at"], "2024-05-06T07:08:09Z");
}

#[test]
fn raw_stats_hold_the_full_snapshot() {
    // Arrange
    let dir = tempdir().unwrap();
    let (agg, _) = analyze_lines([LINE]);
    let stats = agg.snapshot(&TopKLimits::default());

    // Act
    write_artifacts(&stats, dir.path(), false).unwrap();

    // Assert
    let raw: Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join("raw_stats.json")).unwrap())
            .unwrap();
    assert_eq!(raw, serde_json::to_value(&stats).unwrap());
    assert_eq!(raw["top_file_types"][0]["name"], "js");
    assert_eq!(raw["ip_classification"]["private"], 1);
}

#[test]
fn fails_when_output_path_is_a_file() {
    // Arrange
    let dir = tempdir().unwrap();
    let blocker = dir.path().join("data");
    fs::write(&blocker, "").unwrap();
    let (agg, _) = analyze_lines([LINE]);

    // Act
    let result = write_artifacts(&agg.snapshot(&TopKLimits::default()), &blocker, true);

    // Assert
    assert!(result.is_err());
}
