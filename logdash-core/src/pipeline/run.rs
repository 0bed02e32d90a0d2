use crate::aggregate::Aggregator;
use crate::input::{InputError, open_lines};
use crate::parse::{LineParser, ParseOutcome};
use crate::pipeline::constants::{
    BATCH_SIZE, CHANNEL_CAPACITY, PROGRESS_EVERY, REJECT_EXCERPT_CHARS,
};
use serde::Serialize;
use std::path::PathBuf;
use std::sync::mpsc::{self, SyncSender};
use std::thread;
use tracing::{debug, info};

/// Line accounting for one pipeline run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PipelineReport {
    pub sources: usize,
    /// Every line read, blank ones included.
    pub lines: u64,
    pub blank: u64,
    pub records: u64,
    pub rejected: u64,
}

type Batch = Result<Vec<String>, InputError>;

/// Reads every source in order and folds the parsed records.
///
/// One reader thread decodes the sources and sends batches of lines over a
/// bounded channel; the calling thread parses and ingests them, so the
/// aggregator never leaves its owner. The first I/O failure aborts the run.
pub fn analyze_sources(paths: &[PathBuf]) -> Result<(Aggregator, PipelineReport), InputError> {
    let (tx, rx) = mpsc::sync_channel::<Batch>(CHANNEL_CAPACITY);

    let owned = paths.to_vec();
    let reader_handle = thread::spawn(move || read_sources(&owned, &tx));

    let mut consumer = Consumer::new(paths.len());
    let mut failure = None;

    for batch in rx {
        match batch {
            Ok(lines) => lines.iter().for_each(|line| consumer.feed(line)),
            Err(e) => {
                failure = Some(e);
                break;
            }
        }
    }

    // The receiver is gone by now, so a blocked reader wakes up and exits.
    if reader_handle.join().is_err() {
        return Err(InputError::ReaderPanicked);
    }
    if let Some(e) = failure {
        return Err(e);
    }

    Ok(consumer.finish())
}

/// In-memory variant of [`analyze_sources`] for already decoded lines.
pub fn analyze_lines<I, S>(lines: I) -> (Aggregator, PipelineReport)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut consumer = Consumer::new(0);
    for line in lines {
        consumer.feed(line.as_ref());
    }
    consumer.finish()
}

fn read_sources(paths: &[PathBuf], tx: &SyncSender<Batch>) {
    for path in paths {
        debug!(path = %path.display(), "reading source");

        let lines = match open_lines(path) {
            Ok(lines) => lines,
            Err(e) => {
                let _ = tx.send(Err(e));
                return;
            }
        };

        let mut batch = Vec::with_capacity(BATCH_SIZE);
        for line in lines {
            match line {
                Ok(line) => batch.push(line),
                Err(e) => {
                    let _ = tx.send(Err(e));
                    return;
                }
            }

            if batch.len() == BATCH_SIZE {
                let full = std::mem::replace(&mut batch, Vec::with_capacity(BATCH_SIZE));
                // If receiver is gone, stop early.
                if tx.send(Ok(full)).is_err() {
                    return;
                }
            }
        }

        if !batch.is_empty() && tx.send(Ok(batch)).is_err() {
            return;
        }
    }
}

struct Consumer {
    parser: LineParser,
    aggregator: Aggregator,
    report: PipelineReport,
}

impl Consumer {
    fn new(sources: usize) -> Self {
        Self {
            parser: LineParser::new(),
            aggregator: Aggregator::new(),
            report: PipelineReport {
                sources,
                ..PipelineReport::default()
            },
        }
    }

    fn feed(&mut self, line: &str) {
        self.report.lines += 1;

        if line.trim().is_empty() {
            self.report.blank += 1;
            return;
        }

        match self.parser.parse_line(line) {
            ParseOutcome::Parsed(record) => {
                self.aggregator.ingest(record);
                self.report.records += 1;

                if self.report.records % PROGRESS_EVERY == 0 {
                    debug!(records = self.report.records, "progress");
                }
            }
            ParseOutcome::Rejected { reason } => {
                self.report.rejected += 1;
                debug!(
                    reason = reason.as_str(),
                    line = %excerpt(line),
                    "rejected line"
                );
            }
        }
    }

    fn finish(self) -> (Aggregator, PipelineReport) {
        let report = self.report;
        info!(
            sources = report.sources,
            lines = report.lines,
            records = report.records,
            rejected = report.rejected,
            "analysis complete"
        );
        (self.aggregator, report)
    }
}

fn excerpt(line: &str) -> String {
    let mut chars = line.chars();
    let head: String = chars.by_ref().take(REJECT_EXCERPT_CHARS).collect();
    if chars.next().is_some() {
        format!("{head}…")
    } else {
        head
    }
}
