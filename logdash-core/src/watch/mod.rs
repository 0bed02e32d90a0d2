//! Polling regeneration loop.

mod fingerprint;
mod run;

pub use fingerprint::{Fingerprints, SourceStamp};
pub use run::{WATCH_TICK, watch_loop};
