//! Aggregator
//!
//! Folds parsed records into running counters in one pass and produces an
//! immutable [`Statistics`] snapshot on demand.
//!
//! ```text
//! Record → Aggregator::ingest → (counters, frequency tables, record store)
//!        → Aggregator::snapshot → Statistics
//! ```

mod aggregator;
mod frequency;
mod limits;
mod statistics;
#[cfg(test)]
mod tests;

pub use aggregator::Aggregator;
pub use frequency::{FrequencyTable, Ranked};
pub use limits::TopKLimits;
pub use statistics::*;
