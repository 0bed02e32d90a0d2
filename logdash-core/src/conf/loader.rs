use crate::conf::error::ConfigError;
use crate::conf::types::LogdashConfig;
use crate::conf::validate::validate_config;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const DEFAULT_CONFIG_FILE: &str = "logdash.hcl";

/// A validated config together with the directory its relative paths
/// resolve against.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedConfig {
    pub config: LogdashConfig,
    pub root: PathBuf,
    /// `None` when no file was read and defaults apply.
    pub source: Option<PathBuf>,
}

/// Reads, parses and validates the config file at `path`.
pub fn load_config(path: &Path) -> Result<LoadedConfig, ConfigError> {
    //--------------------------------------------------------------------------
    // Hard fail: IO and parsing
    //--------------------------------------------------------------------------
    let raw = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
    let config: LogdashConfig = hcl::from_str(&raw).map_err(|e| ConfigError::parse(path, e))?;

    //--------------------------------------------------------------------------
    // Semantic validation
    //--------------------------------------------------------------------------
    validate_config(&config)?;

    debug!(path = %path.display(), "config loaded");

    Ok(LoadedConfig {
        config,
        root: config_root(path),
        source: Some(path.to_path_buf()),
    })
}

/// Like [`load_config`], but a missing file yields the defaults rooted at
/// the file's directory.
pub fn load_optional_config(path: &Path) -> Result<LoadedConfig, ConfigError> {
    if path.exists() {
        return load_config(path);
    }

    debug!(path = %path.display(), "no config file, using defaults");

    Ok(LoadedConfig {
        config: LogdashConfig::default(),
        root: config_root(path),
        source: None,
    })
}

fn config_root(path: &Path) -> PathBuf {
    path.parent().map(Path::to_path_buf).unwrap_or_default()
}
