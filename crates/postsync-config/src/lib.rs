//! Shared configuration for postsync tools.
//!
//! Layered loading (defaults, then the TOML file, then `POSTSYNC_`
//! environment variables) and translation to
//! `postsync_core::ServiceConfig`.

use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use postsync_core::{DEFAULT_BASE_URL, ServiceConfig};

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// API root; the collection lives at `{base_url}/posts`.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout: u64,

    /// Override for the `User-Agent` header.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,

    /// Presentation defaults.
    #[serde(default)]
    pub defaults: Defaults,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout: default_timeout(),
            user_agent: None,
            defaults: Defaults::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Defaults {
    #[serde(default = "default_output")]
    pub output: String,

    #[serde(default = "default_color")]
    pub color: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output: default_output(),
            color: default_color(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.into()
}
fn default_timeout() -> u64 {
    30
}
fn default_output() -> String {
    "table".into()
}
fn default_color() -> String {
    "auto".into()
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("com", "postsync", "postsync").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("postsync");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the full Config from the canonical file + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Load from an explicit file path + environment.
///
/// A missing file is not an error: defaults and environment still apply.
/// Nested keys use a double underscore, e.g. `POSTSYNC_DEFAULTS__OUTPUT`.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("POSTSYNC_").split("__"));

    let config: Config = figment.extract()?;
    Ok(config)
}

/// Load config, returning a default if loading fails.
pub fn load_config_or_default() -> Config {
    load_config().unwrap_or_default()
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write to the canonical config path.
pub fn save_config(cfg: &Config) -> Result<PathBuf, ConfigError> {
    let path = config_path();
    save_config_to(cfg, &path)?;
    Ok(path)
}

pub fn save_config_to(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(path, toml_str)?;
    Ok(())
}

// ── Translation ─────────────────────────────────────────────────────

impl Config {
    /// Validate and build the runtime `ServiceConfig`.
    pub fn to_service_config(&self) -> Result<ServiceConfig, ConfigError> {
        let base_url: Url = self
            .base_url
            .parse()
            .map_err(|e: url::ParseError| ConfigError::Validation {
                field: "base_url".into(),
                reason: format!("{e}: {}", self.base_url),
            })?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(ConfigError::Validation {
                field: "base_url".into(),
                reason: format!("expected an http(s) URL, got '{}'", base_url.scheme()),
            });
        }
        if self.timeout == 0 {
            return Err(ConfigError::Validation {
                field: "timeout".into(),
                reason: "must be at least one second".into(),
            });
        }

        let mut service = ServiceConfig::new(base_url);
        service.timeout = Duration::from_secs(self.timeout);
        if let Some(ref agent) = self.user_agent {
            service.user_agent.clone_from(agent);
        }
        Ok(service)
    }
}
