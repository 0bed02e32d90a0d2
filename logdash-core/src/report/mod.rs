//! Dashboard artifacts and the terminal summary.

mod artifacts;
mod error;
mod render;
pub mod rows;
#[cfg(test)]
mod tests;

pub use artifacts::{ARTIFACT_FILES, write_artifacts, write_artifacts_at};
pub use error::ReportError;
pub use render::{SUMMARY_TOP_ENDPOINTS, render_summary};
pub use rows::{Summary, build_summary};
