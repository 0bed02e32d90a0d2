use integration_tests::harness::{LogFixture, access_line, sample_day};
use logdash_core::cli::regenerate;
use logdash_core::watch::watch_loop;
use std::cell::Cell;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

const CONFIG: &str = r#"
input  = { paths = ["access.log"] }
output = { dir = "data", pretty = false }
watch  = { interval_secs = 1 }
"#;

#[test]
fn appended_lines_are_picked_up_on_the_next_poll() {
    // Arrange
    let fixture = LogFixture::new();
    fixture.write_plain("access.log", &sample_day());
    let settings = fixture.settings(CONFIG);
    let stop = AtomicBool::new(false);
    let totals = Cell::new(Vec::new());

    // Act
    let runs = watch_loop(
        Duration::from_millis(5),
        &stop,
        || Ok(settings.sources()?),
        |sources| {
            let outcome = regenerate(&settings, sources, true)?;
            let mut seen = totals.take();
            seen.push(outcome.stats.total_requests);

            if seen.len() == 1 {
                fixture.append(
                    "access.log",
                    &[access_line(
                        "1.1.1.1",
                        "10/Oct/2023:10:00:00 +0000",
                        "GET",
                        "/new",
                        200,
                        10,
                        "Mozilla/5.0",
                    )],
                );
            } else {
                stop.store(true, Ordering::Relaxed);
            }
            totals.set(seen);
            Ok(())
        },
    );

    // Assert
    assert_eq!(runs, 2);
    assert_eq!(totals.take(), vec![6, 7]);
    assert_eq!(fixture.read_json("data/summary.json")["total_requests"], 7);
}

#[test]
fn missing_sources_do_not_stop_the_loop() {
    // Arrange
    let fixture = LogFixture::new();
    let settings = fixture.settings(CONFIG);
    let stop = AtomicBool::new(false);
    let polls = Cell::new(0);

    // Act
    let runs = watch_loop(
        Duration::from_millis(5),
        &stop,
        || {
            polls.set(polls.get() + 1);
            if polls.get() == 2 {
                fixture.write_plain("access.log", &sample_day());
            }
            Ok(settings.sources()?)
        },
        |sources| {
            regenerate(&settings, sources, true)?;
            stop.store(true, Ordering::Relaxed);
            Ok(())
        },
    );

    // Assert
    assert_eq!(runs, 1);
    assert_eq!(polls.get(), 2);
    assert_eq!(fixture.read_json("data/summary.json")["total_requests"], 6);
}
