use crate::conf::error::ConfigError;
use crate::conf::types::LogdashConfig;

/// Checks the values serde cannot express. Stops at the first problem.
pub fn validate_config(config: &LogdashConfig) -> Result<(), ConfigError> {
    if config.watch.interval_secs == 0 {
        return Err(ConfigError::invalid(
            "watch.interval_secs",
            "must be at least 1 second",
        ));
    }

    for (name, value) in config.limits.entries() {
        if value == 0 {
            return Err(ConfigError::invalid(
                format!("limits.{name}"),
                "must be at least 1",
            ));
        }
    }

    Ok(())
}
