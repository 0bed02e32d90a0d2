use integration_tests::harness::{CapturedEvent, init_test_tracing, sample_day};
use logdash_core::pipeline::analyze_lines;
use std::sync::{Arc, Mutex};
use tracing::Level;

#[test]
fn rejected_lines_and_summary_are_logged() {
    // Arrange
    let events: Arc<Mutex<Vec<CapturedEvent>>> = Arc::default();
    init_test_tracing(events.clone());

    // Act
    let (_, report) = analyze_lines(sample_day());

    // Assert
    assert_eq!(report.rejected, 1);

    let events = events.lock().unwrap();
    let rejected = events
        .iter()
        .find(|e| e.message() == Some("rejected line"))
        .expect("rejected line event");
    assert_eq!(rejected.level, Level::DEBUG);
    assert_eq!(rejected.field("reason"), Some("grammar_mismatch"));
    assert_eq!(
        rejected.field("line"),
        Some("this is not an access log line")
    );

    let summary = events
        .iter()
        .find(|e| e.message() == Some("analysis complete"))
        .expect("summary event");
    assert_eq!(summary.level, Level::INFO);
    assert_eq!(summary.field("records"), Some("6"));
}
