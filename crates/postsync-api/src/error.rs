use thiserror::Error;

/// Top-level error type for the `postsync-api` crate.
///
/// Covers every failure mode of the collection endpoint: transport,
/// non-success HTTP status, and undecodable bodies. `postsync-core` maps
/// these into domain errors or outcome events.
#[derive(Debug, Error)]
pub enum Error {
    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, timeout, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ── Server ──────────────────────────────────────────────────────
    /// The server answered with a non-success status.
    #[error("Request failed with status code {status}: {message}")]
    Api { status: u16, message: String },

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

impl Error {
    /// HTTP status code, when the server produced one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
