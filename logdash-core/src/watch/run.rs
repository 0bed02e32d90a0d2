use crate::error::LogdashError;
use crate::watch::fingerprint::Fingerprints;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::{Duration, Instant};
use tracing::{error, info};

/// Granularity of the stop-flag check while waiting between polls.
pub const WATCH_TICK: Duration = Duration::from_millis(100);

/// Re-runs `on_change` whenever the resolved sources change.
///
/// The first poll always runs. After that the sources are re-resolved and
/// fingerprinted every `interval`, and `on_change` runs only when a
/// fingerprint differs from the last successful run. A failing cycle is
/// logged and retried on the next poll. Returns the number of successful
/// runs once `stop` is raised.
pub fn watch_loop<R, F>(
    interval: Duration,
    stop: &AtomicBool,
    mut resolve: R,
    mut on_change: F,
) -> usize
where
    R: FnMut() -> Result<Vec<PathBuf>, LogdashError>,
    F: FnMut(&[PathBuf]) -> Result<(), LogdashError>,
{
    let mut last: Option<Fingerprints> = None;
    let mut runs = 0;

    while !stop.load(Ordering::Relaxed) {
        match resolve() {
            Ok(paths) => {
                let current = Fingerprints::capture(&paths);
                let due = last
                    .as_ref()
                    .is_none_or(|previous| current.changed_since(previous));

                if due {
                    info!(sources = paths.len(), "sources changed, regenerating");
                    match on_change(&paths) {
                        Ok(()) => {
                            runs += 1;
                            last = Some(current);
                            info!(runs, "dashboard data updated");
                        }
                        Err(e) => error!(error = %e, "regeneration failed"),
                    }
                }
            }
            Err(e) => error!(error = %e, "failed to resolve sources"),
        }

        sleep_unless_stopped(interval, stop);
    }

    info!(runs, "watch stopped");
    runs
}

fn sleep_unless_stopped(interval: Duration, stop: &AtomicBool) {
    let deadline = Instant::now() + interval;

    while !stop.load(Ordering::Relaxed) {
        let now = Instant::now();
        if now >= deadline {
            return;
        }
        thread::sleep(WATCH_TICK.min(deadline - now));
    }
}
