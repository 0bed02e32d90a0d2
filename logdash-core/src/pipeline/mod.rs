//! Drives sources through the parser into an [`Aggregator`](crate::aggregate::Aggregator).

mod constants;
mod run;

pub use run::{PipelineReport, analyze_lines, analyze_sources};
