//! Config subcommand handlers.

use clap::ValueEnum;
use dialoguer::Input;

use postsync_config::Config;

use crate::cli::{ColorMode, ConfigArgs, ConfigCommand, GlobalOpts, OutputFormat};
use crate::config;
use crate::error::CliError;
use crate::output;

// ── Helpers ─────────────────────────────────────────────────────────

/// Map a dialoguer / interactive I/O failure into CliError.
fn prompt_err(e: impl std::fmt::Display) -> CliError {
    CliError::Validation {
        field: "interactive".into(),
        reason: format!("prompt failed: {e}"),
    }
}

fn parse_timeout(value: &str) -> Result<u64, CliError> {
    value.parse().map_err(|_| CliError::Validation {
        field: "timeout".into(),
        reason: "must be a number (seconds)".into(),
    })
}

/// Apply one `key = value` assignment to a loaded config.
fn set_key(cfg: &mut Config, key: &str, value: String) -> Result<(), CliError> {
    match key {
        "base_url" | "base-url" => cfg.base_url = value,
        "timeout" => cfg.timeout = parse_timeout(&value)?,
        "user_agent" | "user-agent" => cfg.user_agent = Some(value),
        "output" => {
            OutputFormat::from_str(&value, true).map_err(|reason| CliError::Validation {
                field: "output".into(),
                reason,
            })?;
            cfg.defaults.output = value;
        }
        "color" => {
            ColorMode::from_str(&value, true).map_err(|reason| CliError::Validation {
                field: "color".into(),
                reason,
            })?;
            cfg.defaults.color = value;
        }
        other => {
            return Err(CliError::Validation {
                field: other.into(),
                reason: format!(
                    "unknown config key '{other}'. Valid keys: base_url, timeout, \
                     user_agent, output, color"
                ),
            });
        }
    }
    // Reject values the service would refuse before writing them.
    cfg.to_service_config()?;
    Ok(())
}

// ── Handler ─────────────────────────────────────────────────────────

pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        // ── Init: interactive wizard ────────────────────────────────
        ConfigCommand::Init => {
            let config_path = config::config_path();
            eprintln!("postsync configuration wizard");
            eprintln!("   Config path: {}\n", config_path.display());

            let defaults = Config::default();

            let base_url: String = Input::new()
                .with_prompt("API base URL")
                .default(defaults.base_url.clone())
                .interact_text()
                .map_err(prompt_err)?;

            let timeout: String = Input::new()
                .with_prompt("Request timeout (seconds)")
                .default(defaults.timeout.to_string())
                .interact_text()
                .map_err(prompt_err)?;

            let mut cfg = Config {
                base_url,
                timeout: parse_timeout(&timeout)?,
                ..defaults
            };
            cfg.to_service_config()?;
            if let Some(ref output) = global.output {
                if let Some(value) = output.to_possible_value() {
                    cfg.defaults.output = value.get_name().to_owned();
                }
            }

            let path = config::save_config(&cfg)?;
            eprintln!("\n✓ Configuration written to {}", path.display());
            eprintln!("\n  Test it: postsync list --limit 5");
            Ok(())
        }

        // ── Show ────────────────────────────────────────────────────
        ConfigCommand::Show => {
            let cfg = config::load_config()?;
            let out = output::render_single(
                &global.output_format(),
                &cfg,
                |c| toml::to_string_pretty(c).unwrap_or_else(|e| format!("{c:#?}\n# {e}")),
                |c| c.base_url.clone(),
            )?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        // ── Path ────────────────────────────────────────────────────
        ConfigCommand::Path => {
            output::print_output(&config::config_path().display().to_string(), false);
            Ok(())
        }

        // ── Set <key> <value> ───────────────────────────────────────
        ConfigCommand::Set { key, value } => {
            let mut cfg = config::load_config_or_default();
            set_key(&mut cfg, &key, value)?;
            let path = config::save_config(&cfg)?;
            if !global.quiet {
                eprintln!("✓ Set {key} in {}", path.display());
            }
            Ok(())
        }
    }
}
