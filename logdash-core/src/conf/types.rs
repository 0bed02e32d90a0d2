use crate::aggregate::TopKLimits;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Represents the whole `logdash.hcl` file. Every section is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogdashConfig {
    pub input: InputConfig,
    pub output: OutputConfig,
    pub watch: WatchConfig,
    pub limits: TopKLimits,
}

/// Where access logs are read from. Entries are glob patterns resolved
/// relative to the directory holding the config file.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct InputConfig {
    pub paths: Vec<String>,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            paths: vec!["logs/access.log".to_string(), "logs/access.log*.gz".to_string()],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub dir: PathBuf,
    /// Indent the JSON artifacts.
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("dashboard/data"),
            pretty: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct WatchConfig {
    pub interval_secs: u64,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self { interval_secs: 60 }
    }
}
