use crate::cli::analyze::regenerate;
use crate::conf::{Overrides, RunSettings};
use crate::watch::watch_loop;
use anyhow::Context;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::info;

pub fn run_watch(overrides: &Overrides) -> anyhow::Result<()> {
    let settings = RunSettings::resolve(overrides)?;

    let stop = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&stop);
    ctrlc::set_handler(move || flag.store(true, Ordering::Relaxed))
        .context("failed to install Ctrl-C handler")?;

    info!(
        interval_secs = settings.interval.as_secs(),
        output = %settings.output_dir.display(),
        "watching sources, press Ctrl+C to stop"
    );

    watch_loop(
        settings.interval,
        &stop,
        || Ok(settings.sources()?),
        |sources| {
            let outcome = regenerate(&settings, sources, true)?;
            info!(
                records = outcome.report.records,
                files = outcome.written.len(),
                "regenerated"
            );
            Ok(())
        },
    );

    Ok(())
}
