use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    // IO / Discovery
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("glob pattern error: {pattern}: {source}")]
    Glob {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("no input files matched: {}", patterns.join(", "))]
    NoSources { patterns: Vec<String> },

    // Parsing
    #[error("failed to parse HCL in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: hcl::Error,
    },

    // Validation
    #[error("invalid value for '{field}': {reason}")]
    Invalid { field: String, reason: String },
}

impl ConfigError {
    pub fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadFile {
            path: path.into(),
            source,
        }
    }

    pub fn parse(path: impl Into<PathBuf>, source: hcl::Error) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }

    pub fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// A short remediation note for errors a user can fix in the config file.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            ConfigError::NoSources { .. } => Some(
                "Point logdash at at least one existing access log.\n\
                 \n\
                 Example:\n\
                 \n\
                 input = { paths = [\"/var/log/nginx/access.log\"] }",
            ),
            ConfigError::Invalid { .. } => Some(
                "Top-K limits and the watch interval must be at least 1.\n\
                 \n\
                 Example:\n\
                 \n\
                 watch  = { interval_secs = 60 }\n\
                 limits = { ips = 50 }",
            ),
            _ => None,
        }
    }
}
