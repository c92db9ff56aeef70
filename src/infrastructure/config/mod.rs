//! Configuration management

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use crate::application::errors::ConfigError;
use crate::domain::entities::DEFAULT_INDENT_SIZE;

/// Largest indent width accepted unless configured otherwise
pub const DEFAULT_MAX_INDENT_SIZE: usize = 16;

/// Formatter configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Config {
    pub formatter: FormatterConfig,
    pub plugins: PluginsConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct FormatterConfig {
    pub default_indent_size: usize,
    pub max_indent_size: usize,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct PluginsConfig {
    pub enabled: bool,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            default_indent_size: DEFAULT_INDENT_SIZE,
            max_indent_size: DEFAULT_MAX_INDENT_SIZE,
        }
    }
}

impl Default for PluginsConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl Config {
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let content = std::fs::read_to_string(&path)
            .map_err(|e| ConfigError::Parse(format!("Failed to read config: {}", e)))?;

        let config: Config = serde_yaml::from_str(&content)
            .map_err(|e| ConfigError::Parse(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load_env() -> Self {
        // Load from environment variables
        let mut config = Config::default();

        if let Some(size) = env_usize("FORMATTER_INDENT_SIZE") {
            config.formatter.default_indent_size = size;
        }

        if let Some(size) = env_usize("FORMATTER_MAX_INDENT_SIZE") {
            config.formatter.max_indent_size = size;
        }

        config
    }

    /// The default indent must itself be accepted by the bound
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.formatter.default_indent_size > self.formatter.max_indent_size {
            return Err(ConfigError::InvalidValue(format!(
                "default-indent-size ({}) exceeds max-indent-size ({})",
                self.formatter.default_indent_size, self.formatter.max_indent_size
            )));
        }
        Ok(())
    }
}

fn env_usize(key: &str) -> Option<usize> {
    let raw = std::env::var(key).ok()?;
    match raw.trim().parse() {
        Ok(v) => Some(v),
        Err(_) => {
            tracing::warn!("Ignoring {}: not a non-negative integer: {}", key, raw);
            None
        }
    }
}
