use crate::conf::ConfigError;
use crate::input::InputError;
use crate::report::ReportError;
use thiserror::Error;

/// Any failure surfaced by a logdash run.
#[derive(Debug, Error)]
pub enum LogdashError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Report(#[from] ReportError),
}
