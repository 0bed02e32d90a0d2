use clap::ValueEnum;
use std::io::{self, IsTerminal};
use tracing_subscriber::{EnvFilter, fmt};

const DEFAULT_DIRECTIVE: &str = "info";

/// Shape of the diagnostic log stream on stderr.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// JSON when stderr is redirected, pretty on a terminal.
    #[default]
    Auto,
    Json,
    Pretty,
}

impl LogFormat {
    /// Collapses `Auto` into the concrete format for this process.
    pub fn resolve(self) -> LogFormat {
        match self {
            LogFormat::Auto if io::stderr().is_terminal() => LogFormat::Pretty,
            LogFormat::Auto => LogFormat::Json,
            other => other,
        }
    }
}

/// Install the global tracing subscriber.
///
/// Filtering comes from `RUST_LOG` and falls back to `info`. Output always
/// goes to stderr so stdout stays free for reports.
pub fn init_logging(format: LogFormat) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

    let builder = fmt().with_env_filter(filter).with_writer(io::stderr);

    // A second init (tests, embedding) keeps the first subscriber.
    let _ = match format.resolve() {
        LogFormat::Json => builder.json().flatten_event(true).try_init(),
        _ => builder.compact().with_target(false).try_init(),
    };
}
