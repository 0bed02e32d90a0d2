//! Optional HCL configuration and the run settings derived from it.

mod discover;
mod error;
mod loader;
mod settings;
#[cfg(test)]
mod tests;
pub mod types;
mod validate;

pub use discover::{discover, resolve_glob, resolve_sources};
pub use error::ConfigError;
pub use loader::{DEFAULT_CONFIG_FILE, LoadedConfig, load_config, load_optional_config};
pub use settings::{Overrides, RunSettings};
pub use types::{InputConfig, LogdashConfig, OutputConfig, WatchConfig};
pub use validate::validate_config;
