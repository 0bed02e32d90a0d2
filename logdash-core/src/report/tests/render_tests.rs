use crate::aggregate::TopKLimits;
use crate::pipeline::analyze_lines;
use crate::report::render_summary;

fn line(path: &str, status: u32) -> String {
    format!(
        r#"8.8.8.8 - - [10/Oct/2023:13:55:36 +0000] "GET {path} HTTP/1.1" {status} 524288 "-" "Mozilla/5.0""#
    )
}

#[test]
fn summary_lists_totals_and_status_distribution() {
    // Arrange
    let lines = [line("/a", 200), line("/b", 404), line("/a", 200), line("/c", 503)];
    let (agg, _) = analyze_lines(&lines);
    let stats = agg.snapshot(&TopKLimits::default());

    // Act
    let out = render_summary(&stats);

    // Assert
    assert!(out.contains("Total requests: 4"));
    assert!(out.contains("Transferred: 2.00 MB"));
    assert!(out.contains("2xx           2   50.0%"));
    assert!(out.contains("4xx           1   25.0%"));
    assert!(out.contains("1. /a (2)"));
}

#[test]
fn summary_shows_at_most_five_endpoints() {
    // Arrange
    let lines: Vec<_> = (0..8).map(|i| line(&format!("/p{i}"), 200)).collect();
    let (agg, _) = analyze_lines(&lines);
    let stats = agg.snapshot(&TopKLimits::default());

    // Act
    let out = render_summary(&stats);

    // Assert
    assert!(out.contains("5. /p4 (1)"));
    assert!(!out.contains("6. "));
}

#[test]
fn empty_summary_renders_placeholder() {
    // Arrange
    let (agg, _) = analyze_lines(Vec::<String>::new());

    // Act
    let out = render_summary(&agg.snapshot(&TopKLimits::default()));

    // Assert
    assert!(out.contains("Total requests: 0"));
    assert!(out.contains("<no requests>"));
}
