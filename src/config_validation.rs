// Configuration validation module

use std::path::Path;
use tracing::{info, warn};

use crate::config::{load_config, ApplicationConfig, ConfigError};

/// Reject configurations the status line cannot show sensibly
pub fn validate_config(config: &ApplicationConfig) -> Result<(), ConfigError> {
    if config.title.trim().is_empty() {
        return Err(ConfigError::Invalid("application.title is empty".to_string()));
    }
    if let Some(idx) = config.bindings.iter().position(|b| b.key.trim().is_empty()) {
        return Err(ConfigError::Invalid(format!(
            "application.bindings[{}] has an empty key",
            idx
        )));
    }
    Ok(())
}

/// Load and validate configuration with error recovery
///
/// Any failure is logged and the built-in defaults are used instead, so a
/// broken config file never keeps the panel from starting.
pub fn load_and_validate_config(config_path: Option<&Path>) -> ApplicationConfig {
    let loaded = load_config(config_path).and_then(|config| {
        validate_config(&config)?;
        Ok(config)
    });

    match loaded {
        Ok(config) => {
            info!(path = ?config_path, "configuration loaded");
            config
        }
        Err(e) => {
            warn!(error = %e, "failed to load configuration, using defaults");
            ApplicationConfig::default()
        }
    }
}
