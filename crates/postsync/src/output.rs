//! Output formatting: table, JSON, YAML, plain.
//!
//! Renders data in the format selected by `--output`. Table uses `tabled`,
//! structured formats use serde, plain emits one identifier per line.

use std::io::{self, IsTerminal, Write};

use owo_colors::OwoColorize;
use tabled::{Table, Tabled, settings::Style};

use crate::cli::{ColorMode, OutputFormat};
use crate::error::CliError;

// ── Color helpers ────────────────────────────────────────────────────

/// Determine whether color output should be enabled.
pub fn should_color(mode: &ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => io::stderr().is_terminal() && std::env::var("NO_COLOR").is_err(),
    }
}

/// Status line on stderr: green check on success, yellow bang otherwise.
pub fn notice(message: &str, ok: bool, color: bool, quiet: bool) {
    if quiet {
        return;
    }
    let line = match (ok, color) {
        (true, true) => format!("{} {message}", "✓".green()),
        (false, true) => format!("{} {}", "!".yellow().bold(), message.yellow()),
        (true, false) => format!("✓ {message}"),
        (false, false) => format!("! {message}"),
    };
    eprintln!("{line}");
}

// ── Render dispatchers ───────────────────────────────────────────────

/// Render a list of serde-serializable + tabled items in the chosen format.
///
/// - `table`: uses the `Tabled` derive to build a pretty table
/// - `json` / `json-compact`: serializes the original data via serde
/// - `yaml`: serializes via serde_yaml
/// - `plain`: calls `id_fn` on each item to emit one identifier per line
pub fn render_list<T, R>(
    format: &OutputFormat,
    data: &[T],
    to_row: impl Fn(&T) -> R,
    id_fn: impl Fn(&T) -> String,
) -> Result<String, CliError>
where
    T: serde::Serialize,
    R: Tabled,
{
    Ok(match format {
        OutputFormat::Table => {
            let rows: Vec<R> = data.iter().map(to_row).collect();
            render_table(&rows)
        }
        OutputFormat::Json => render_json(data, false)?,
        OutputFormat::JsonCompact => render_json(data, true)?,
        OutputFormat::Yaml => render_yaml(data)?,
        OutputFormat::Plain => data.iter().map(&id_fn).collect::<Vec<_>>().join("\n"),
    })
}

/// Render a single serde-serializable item in the chosen format.
///
/// Table rendering uses `detail_fn`, since single-item views are a
/// key/value block rather than a `Tabled` row.
pub fn render_single<T>(
    format: &OutputFormat,
    data: &T,
    detail_fn: impl Fn(&T) -> String,
    id_fn: impl Fn(&T) -> String,
) -> Result<String, CliError>
where
    T: serde::Serialize,
{
    Ok(match format {
        OutputFormat::Table => detail_fn(data),
        OutputFormat::Json => render_json(data, false)?,
        OutputFormat::JsonCompact => render_json(data, true)?,
        OutputFormat::Yaml => render_yaml(data)?,
        OutputFormat::Plain => id_fn(data),
    })
}

/// Print the rendered output to stdout, respecting quiet mode.
pub fn print_output(output: &str, quiet: bool) {
    if quiet || output.is_empty() {
        return;
    }
    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{output}");
}

// ── Format-specific renderers ────────────────────────────────────────

fn render_table<R: Tabled>(rows: &[R]) -> String {
    Table::new(rows).with(Style::rounded()).to_string()
}

fn render_json<T: serde::Serialize + ?Sized>(data: &T, compact: bool) -> Result<String, CliError> {
    let rendered = if compact {
        serde_json::to_string(data)
    } else {
        serde_json::to_string_pretty(data)
    };
    rendered.map_err(|e| CliError::Internal(format!("JSON serialization failed: {e}")))
}

fn render_yaml<T: serde::Serialize + ?Sized>(data: &T) -> Result<String, CliError> {
    serde_yaml::to_string(data)
        .map_err(|e| CliError::Internal(format!("YAML serialization failed: {e}")))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize)]
    struct Item {
        id: u32,
        name: &'static str,
    }

    #[derive(Tabled)]
    struct Row {
        #[tabled(rename = "ID")]
        id: u32,
    }

    fn items() -> Vec<Item> {
        vec![Item { id: 1, name: "a" }, Item { id: 2, name: "b" }]
    }

    #[test]
    fn plain_emits_one_id_per_line() {
        let out = render_list(&OutputFormat::Plain, &items(), |i| Row { id: i.id }, |i| i.id.to_string())
            .unwrap();
        assert_eq!(out, "1\n2");
    }

    #[test]
    fn compact_json_is_single_line() {
        let out = render_list(&OutputFormat::JsonCompact, &items(), |i| Row { id: i.id }, |i| i.id.to_string())
            .unwrap();
        assert_eq!(out, r#"[{"id":1,"name":"a"},{"id":2,"name":"b"}]"#);
    }

    #[test]
    fn table_has_header() {
        let out = render_list(&OutputFormat::Table, &items(), |i| Row { id: i.id }, |i| i.id.to_string())
            .unwrap();
        assert!(out.contains("ID"));
    }

    #[test]
    fn never_mode_disables_color() {
        assert!(!should_color(&ColorMode::Never));
        assert!(should_color(&ColorMode::Always));
    }
}
