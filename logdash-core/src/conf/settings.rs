use crate::aggregate::TopKLimits;
use crate::conf::discover::resolve_sources;
use crate::conf::error::ConfigError;
use crate::conf::loader::{DEFAULT_CONFIG_FILE, LoadedConfig, load_config, load_optional_config};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Values given on the command line. Anything set here wins over the file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    /// Explicit config path. When absent, `logdash.hcl` is read if present.
    pub config: Option<PathBuf>,
    /// Input patterns, resolved against the working directory.
    pub paths: Vec<String>,
    pub output_dir: Option<PathBuf>,
    pub interval_secs: Option<u64>,
}

/// Everything a run needs, after merging the config file with overrides.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSettings {
    /// Directory the input patterns are resolved against.
    pub root: PathBuf,
    pub patterns: Vec<String>,
    pub output_dir: PathBuf,
    pub pretty: bool,
    pub interval: Duration,
    pub limits: TopKLimits,
    pub config_file: Option<PathBuf>,
}

impl RunSettings {
    pub fn resolve(overrides: &Overrides) -> Result<Self, ConfigError> {
        let loaded = match &overrides.config {
            Some(path) => load_config(path)?,
            None => load_optional_config(Path::new(DEFAULT_CONFIG_FILE))?,
        };

        Self::merge(loaded, overrides)
    }

    pub fn merge(loaded: LoadedConfig, overrides: &Overrides) -> Result<Self, ConfigError> {
        let LoadedConfig {
            config,
            root,
            source,
        } = loaded;

        let output_dir = overrides
            .output_dir
            .clone()
            .unwrap_or_else(|| root.join(&config.output.dir));

        let (root, patterns) = if overrides.paths.is_empty() {
            (root, config.input.paths)
        } else {
            (PathBuf::new(), overrides.paths.clone())
        };

        let interval_secs = overrides
            .interval_secs
            .unwrap_or(config.watch.interval_secs);
        if interval_secs == 0 {
            return Err(ConfigError::invalid("interval", "must be at least 1 second"));
        }

        Ok(Self {
            root,
            patterns,
            output_dir,
            pretty: config.output.pretty,
            interval: Duration::from_secs(interval_secs),
            limits: config.limits,
            config_file: source,
        })
    }

    /// Expands the input patterns against the filesystem as it is now.
    pub fn sources(&self) -> Result<Vec<PathBuf>, ConfigError> {
        resolve_sources(&self.root, &self.patterns)
    }
}

