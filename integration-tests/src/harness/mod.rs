mod fixtures;
pub mod tracing;

pub use fixtures::{LogFixture, access_line, sample_day};
pub use tracing::{CapturedEvent, init_test_tracing};
