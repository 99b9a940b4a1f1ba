//! Clap derive structures for the `postsync` CLI.
//!
//! Defines the command tree, global flags, and shared value enums.

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// postsync -- browse and edit a remote post collection
#[derive(Debug, Parser)]
#[command(
    name = "postsync",
    version,
    about = "Browse and edit a remote post collection from the command line",
    long_about = "Loads a REST-style /posts collection into a normalized local cache,\n\
        applies creates, edits, deletes, and reactions, and renders the result.\n\n\
        Reactions and local-only posts live in the cache for the duration of one run.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// API root serving /posts (overrides config)
    #[arg(long, short = 'u', env = "POSTSYNC_BASE_URL", global = true)]
    pub base_url: Option<String>,

    /// Output format [default: from config, else table]
    #[arg(long, short = 'o', env = "POSTSYNC_OUTPUT", global = true)]
    pub output: Option<OutputFormat>,

    /// When to use color output [default: from config, else auto]
    #[arg(long, global = true)]
    pub color: Option<ColorMode>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Skip confirmation prompts
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,

    /// Request timeout in seconds (overrides config)
    #[arg(long, env = "POSTSYNC_TIMEOUT", global = true)]
    pub timeout: Option<u64>,
}

impl GlobalOpts {
    pub fn output_format(&self) -> OutputFormat {
        self.output.clone().unwrap_or(OutputFormat::Table)
    }

    pub fn color_mode(&self) -> ColorMode {
        self.color.clone().unwrap_or(ColorMode::Auto)
    }
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one id per line (scripting)
    Plain,
}

#[derive(Debug, Clone, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List posts, newest first
    #[command(alias = "ls")]
    List(ListArgs),

    /// Show one post
    #[command(alias = "get")]
    Show {
        /// Post id (number, or UUID for local posts)
        id: String,
    },

    /// Create a post
    Create(CreateArgs),

    /// Replace a post's fields
    #[command(alias = "edit")]
    Update(UpdateArgs),

    /// Delete a post
    #[command(alias = "rm")]
    Delete {
        /// Post id
        id: String,
    },

    /// Add reactions to a post and show the result
    React(ReactArgs),

    /// Manage CLI configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Post commands ────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Only posts by this numeric author id
    #[arg(long, short = 'a')]
    pub author: Option<u64>,

    /// Show at most this many posts
    #[arg(long, short = 'l')]
    pub limit: Option<usize>,
}

#[derive(Debug, Args)]
pub struct CreateArgs {
    /// Post title
    #[arg(long, short = 't')]
    pub title: String,

    /// Post body
    #[arg(long, short = 'b', default_value = "")]
    pub body: String,

    /// Author id, sent as entered
    #[arg(long, short = 'a')]
    pub author: String,

    /// Add the post to the local cache only, without contacting the server
    #[arg(long)]
    pub local: bool,
}

#[derive(Debug, Args)]
pub struct UpdateArgs {
    /// Post id
    pub id: String,

    /// New title
    #[arg(long, short = 't')]
    pub title: Option<String>,

    /// New body
    #[arg(long, short = 'b')]
    pub body: Option<String>,

    /// New numeric author id
    #[arg(long, short = 'a')]
    pub author: Option<u64>,
}

#[derive(Debug, Args)]
pub struct ReactArgs {
    /// Post id
    pub id: String,

    /// Reaction: thumbsUp, wow, heart, rocket, coffee
    pub kind: String,

    /// How many times to react
    #[arg(long, short = 'n', default_value = "1")]
    pub times: u32,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  CONFIG
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Create the config file with guided setup
    Init,

    /// Display current resolved configuration
    Show,

    /// Print the config file path
    Path,

    /// Set a configuration value
    Set {
        /// Config key: base_url, timeout, user_agent, output, color
        key: String,

        /// Value to set
        value: String,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  COMPLETIONS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
