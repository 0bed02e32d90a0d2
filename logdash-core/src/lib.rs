//! Access-log analytics: parse combined-format lines, fold them into
//! statistics and publish the result as dashboard JSON.
//!
//! The data flow is:
//!
//! ```text
//! source files → input::open_lines → parse::LineParser
//!              → aggregate::Aggregator → aggregate::Statistics
//!              → report::write_artifacts
//! ```

pub mod aggregate;
pub mod classify;
pub mod cli;
pub mod conf;
pub mod error;
pub mod input;
pub mod logging;
pub mod parse;
pub mod pipeline;
pub mod report;
pub mod watch;

pub use error::LogdashError;
