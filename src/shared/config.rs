use std::path::{Path, PathBuf};
use std::time::Duration;

use schemars::JsonSchema;
use serde::Deserialize;

use crate::infra::github::DEFAULT_BASE_URL;
use crate::shared::dirs;
use crate::shared::env_var::EnvVars;

/// Top-level configuration for ghlookup.
#[derive(Debug, Default, Deserialize, JsonSchema, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// GitHub API settings.
    #[serde(default)]
    pub api: ApiConfig,

    /// Log file settings.
    #[serde(default)]
    pub log: LogConfig,
}

/// GitHub API configuration.
#[derive(Debug, Deserialize, JsonSchema, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ApiConfig {
    /// Base URL of the REST API (default: "https://api.github.com").
    #[serde(default = "default_base_url")]
    #[schemars(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds (default: 10).
    #[serde(default = "default_timeout_secs")]
    #[schemars(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Log configuration.
#[derive(Debug, Deserialize, JsonSchema, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct LogConfig {
    /// Filter directive for the log file, e.g. "debug" or "ghl=trace" (default: "info").
    #[serde(default = "default_log_level")]
    #[schemars(default = "default_log_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read config file (permission error, etc.)
    #[error("Failed to read config file {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    /// YAML parse error
    #[error("Invalid config file {path}: {message}")]
    ParseError { path: PathBuf, message: String },
}

/// Load configuration from ~/.config/ghlookup/config.ya?ml, then apply
/// GHLOOKUP_* environment overrides.
/// Returns Config::default() (plus overrides) if no config file exists.
pub fn load_config() -> anyhow::Result<Config> {
    let config = match dirs::config_dir() {
        Some(dir) => load_config_from_dir(&dir.join("ghlookup"))?,
        None => Config::default(),
    };
    Ok(apply_env_overrides(config, &EnvVars::load()))
}

/// Load configuration from a specific directory.
/// Searches for config.yaml, then config.yml in the given directory.
/// Returns Config::default() if neither file exists.
pub fn load_config_from_dir(dir: &Path) -> anyhow::Result<Config> {
    for filename in &["config.yaml", "config.yml"] {
        let path = dir.join(filename);
        match std::fs::read_to_string(&path) {
            Ok(content) => return parse_config(&content, &path),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => continue,
            Err(e) => return Err(ConfigError::ReadError { path, source: e }.into()),
        }
    }

    Ok(Config::default())
}

/// Environment variables win over the file.
fn apply_env_overrides(mut config: Config, env: &EnvVars) -> Config {
    if let Some(url) = &env.api_url {
        config.api.base_url = url.clone();
    }
    if let Some(level) = &env.log {
        config.log.level = level.clone();
    }
    config
}

/// Parse YAML content into Config.
fn parse_config(content: &str, path: &Path) -> anyhow::Result<Config> {
    serde_yaml::from_str(content)
        .map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
        .map_err(Into::into)
}

/// Generate JSON Schema for the Config struct.
pub fn generate_schema() -> schemars::Schema {
    schemars::schema_for!(Config)
}
