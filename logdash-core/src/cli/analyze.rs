use crate::aggregate::Statistics;
use crate::conf::{Overrides, RunSettings};
use crate::error::LogdashError;
use crate::pipeline::{PipelineReport, analyze_sources};
use crate::report::{render_summary, write_artifacts};
use anyhow::Context;
use std::path::PathBuf;

/// Result of one parse-aggregate-write cycle.
#[derive(Debug)]
pub struct RunOutcome {
    pub stats: Statistics,
    pub report: PipelineReport,
    /// Empty when writing was skipped.
    pub written: Vec<PathBuf>,
}

/// Runs the pipeline over `sources` and optionally writes the artifacts.
pub fn regenerate(
    settings: &RunSettings,
    sources: &[PathBuf],
    write: bool,
) -> Result<RunOutcome, LogdashError> {
    let (aggregator, report) = analyze_sources(sources)?;
    let stats = aggregator.snapshot(&settings.limits);

    let written = if write {
        write_artifacts(&stats, &settings.output_dir, settings.pretty)?
    } else {
        Vec::new()
    };

    Ok(RunOutcome {
        stats,
        report,
        written,
    })
}

pub fn run_analyze(overrides: &Overrides, write: bool, json: bool) -> anyhow::Result<()> {
    let settings = RunSettings::resolve(overrides)?;
    let sources = settings.sources()?;
    let outcome = regenerate(&settings, &sources, write)?;

    if json {
        let body = serde_json::to_string_pretty(&outcome.stats)
            .context("failed to serialize statistics")?;
        println!("{body}");
        return Ok(());
    }

    print!("{}", render_summary(&outcome.stats));
    println!();
    println!(
        "✔ {} lines read, {} parsed, {} rejected",
        outcome.report.lines, outcome.report.records, outcome.report.rejected
    );
    if !outcome.written.is_empty() {
        println!(
            "✔ {} files written to {}",
            outcome.written.len(),
            settings.output_dir.display()
        );
    }

    Ok(())
}
