//! CLI-side configuration: layers command-line overrides on top of the
//! loaded `postsync_config::Config` and builds the core `ServiceConfig`.

use clap::ValueEnum;

use postsync_config::Config;
use postsync_core::ServiceConfig;

use crate::cli::{ColorMode, GlobalOpts, OutputFormat};
use crate::error::CliError;

pub use postsync_config::{config_path, load_config, load_config_or_default, save_config};

/// Fill presentation options the user did not pass from the config
/// file's `[defaults]` table. Unknown values fall back to clap defaults.
pub fn apply_defaults(global: &mut GlobalOpts, cfg: &Config) {
    if global.output.is_none() {
        global.output = OutputFormat::from_str(&cfg.defaults.output, true).ok();
    }
    if global.color.is_none() {
        global.color = ColorMode::from_str(&cfg.defaults.color, true).ok();
    }
}

/// Build a `ServiceConfig` from the config file and CLI overrides.
pub fn resolve_service_config(global: &GlobalOpts, cfg: &Config) -> Result<ServiceConfig, CliError> {
    let mut cfg = cfg.clone();
    if let Some(ref url) = global.base_url {
        cfg.base_url.clone_from(url);
    }
    if let Some(timeout) = global.timeout {
        cfg.timeout = timeout;
    }
    Ok(cfg.to_service_config()?)
}
