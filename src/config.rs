// Configuration loading module
// Runtime `application` section of config.yaml; the other sections are compiled in by build.rs

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// The bundled config.yaml, used when no file is given on the command line
pub const DEFAULT_CONFIG: &str = include_str!("config.yaml");

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Top level of config.yaml; compile-time sections are ignored here
#[derive(Debug, Clone, Deserialize)]
struct ConfigFile {
    application: ApplicationConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApplicationConfig {
    pub title: String,
    #[serde(default)]
    pub bindings: Vec<BindingConfigYaml>,
    pub status_bar: StatusBarConfigYaml,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BindingConfigYaml {
    pub key: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StatusBarConfigYaml {
    pub default_text: String,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        let binding = |key: &str, description: &str| BindingConfigYaml {
            key: key.to_string(),
            description: description.to_string(),
        };
        Self {
            title: "Settings".to_string(),
            bindings: vec![
                binding("[←/→]", "Switch tab"),
                binding("[1-3]", "Jump to tab"),
                binding("[Esc]", "Clear focus"),
                binding("[q]", "Quit"),
            ],
            status_bar: StatusBarConfigYaml {
                default_text: "Click a tab or use the arrow keys".to_string(),
            },
        }
    }
}

/// Parse the `application` section out of a config document
pub fn parse_config(contents: &str) -> Result<ApplicationConfig, ConfigError> {
    let file: ConfigFile = serde_yaml::from_str(contents)?;
    Ok(file.application)
}

/// Load configuration from `config_path`, or the bundled file when none is given
pub fn load_config(config_path: Option<&Path>) -> Result<ApplicationConfig, ConfigError> {
    match config_path {
        Some(path) => {
            let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })?;
            parse_config(&contents)
        }
        None => parse_config(DEFAULT_CONFIG),
    }
}
