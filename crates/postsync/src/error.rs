//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` and `ConfigError` into user-facing errors with
//! actionable help text and stable exit codes.

use miette::Diagnostic;
use thiserror::Error;

use postsync_config::ConfigError;
use postsync_core::CoreError;

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const NOT_FOUND: i32 = 4;
    pub const CONNECTION: i32 = 7;
    pub const TIMEOUT: i32 = 8;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────
    #[error("Could not reach {url}")]
    #[diagnostic(
        code(postsync::connection_failed),
        help(
            "Check that the server is running and accessible.\n\
             Override the address with --base-url or POSTSYNC_BASE_URL."
        )
    )]
    ConnectionFailed {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Request to {url} timed out")]
    #[diagnostic(
        code(postsync::timeout),
        help("Increase the timeout with --timeout or check server responsiveness.")
    )]
    Timeout { url: String },

    #[error("Could not load posts: {message}")]
    #[diagnostic(
        code(postsync::fetch_failed),
        help("The collection must load before posts can be shown or changed.")
    )]
    FetchFailed { message: String },

    // ── Resources ────────────────────────────────────────────────────
    #[error("Post '{identifier}' not found")]
    #[diagnostic(
        code(postsync::not_found),
        help("Run: postsync list to see available posts")
    )]
    NotFound { identifier: String },

    // ── API ──────────────────────────────────────────────────────────
    #[error("API error: {message}")]
    #[diagnostic(code(postsync::api_error))]
    ApiError {
        message: String,
        status: Option<u16>,
    },

    // ── Validation ───────────────────────────────────────────────────
    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(postsync::validation))]
    Validation { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────
    #[error(transparent)]
    #[diagnostic(
        code(postsync::config),
        help("Inspect the file with: postsync config show")
    )]
    Config(ConfigError),

    // ── Interactive ──────────────────────────────────────────────────
    #[error("Destructive operation '{action}' requires confirmation")]
    #[diagnostic(
        code(postsync::confirmation_required),
        help("Use --yes (-y) to skip confirmation in non-interactive contexts.")
    )]
    NonInteractiveRequiresYes { action: String },

    // ── IO / Serialization ───────────────────────────────────────────
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } | Self::FetchFailed { .. } => exit_code::CONNECTION,
            Self::Timeout { .. } => exit_code::TIMEOUT,
            Self::NotFound { .. }
            | Self::ApiError {
                status: Some(404), ..
            } => exit_code::NOT_FOUND,
            Self::Validation { .. } | Self::NonInteractiveRequiresYes { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }
}

// ── ConfigError → CliError mapping ───────────────────────────────────

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Validation { field, reason } => CliError::Validation { field, reason },
            ConfigError::Io(e) => CliError::Io(e),
            other => CliError::Config(other),
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ConnectionFailed { url, reason } => CliError::ConnectionFailed {
                url,
                source: reason.into(),
            },

            CoreError::Timeout { url } => CliError::Timeout { url },

            CoreError::NotFound { identifier, .. } => CliError::NotFound { identifier },

            CoreError::Api { message, status } => CliError::ApiError { message, status },

            CoreError::Config { message } => CliError::Validation {
                field: "config".into(),
                reason: message,
            },
        }
    }
}
