// ── Core error types ──
//
// Errors surfaced by the service to its callers. Only `create` and
// configuration can fail outright; the other remote operations turn
// their failures into outcome events instead.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Connection errors ────────────────────────────────────────────
    #[error("Cannot reach {url}: {reason}")]
    ConnectionFailed { url: String, reason: String },

    #[error("Request to {url} timed out")]
    Timeout { url: String },

    // ── Data errors ──────────────────────────────────────────────────
    #[error("Entity not found: {entity_type} with id {identifier}")]
    NotFound {
        entity_type: String,
        identifier: String,
    },

    // ── API errors (wrapped, not exposed raw) ────────────────────────
    #[error("API error: {message}")]
    Api {
        message: String,
        /// HTTP status code (if applicable).
        status: Option<u16>,
    },

    // ── Configuration errors ─────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl CoreError {
    /// HTTP status the failure carried, when there was one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => *status,
            Self::NotFound { .. } => Some(404),
            _ => None,
        }
    }
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<postsync_api::Error> for CoreError {
    fn from(err: postsync_api::Error) -> Self {
        match err {
            postsync_api::Error::Transport(ref e) => {
                let url = e
                    .url()
                    .map(ToString::to_string)
                    .unwrap_or_else(|| "<unknown>".into());
                if e.is_timeout() {
                    CoreError::Timeout { url }
                } else if e.is_connect() {
                    CoreError::ConnectionFailed {
                        url,
                        reason: e.to_string(),
                    }
                } else {
                    CoreError::Api {
                        message: e.to_string(),
                        status: e.status().map(|s| s.as_u16()),
                    }
                }
            }
            postsync_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid URL: {e}"),
            },
            postsync_api::Error::Api { status: 404, message } => CoreError::NotFound {
                entity_type: "post".into(),
                identifier: message,
            },
            e @ postsync_api::Error::Api { .. } => CoreError::Api {
                status: e.status(),
                message: e.to_string(),
            },
            postsync_api::Error::Deserialization { message, .. } => CoreError::Api {
                message: format!("Unreadable response: {message}"),
                status: None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_404_maps_to_not_found() {
        let err: CoreError = postsync_api::Error::Api {
            status: 404,
            message: "Not Found".into(),
        }
        .into();
        assert!(matches!(err, CoreError::NotFound { .. }));
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn api_500_keeps_status() {
        let err: CoreError = postsync_api::Error::Api {
            status: 500,
            message: "Internal Server Error".into(),
        }
        .into();
        assert_eq!(err.status(), Some(500));
        assert!(err.to_string().contains("status code 500"));
    }

    #[test]
    fn deserialization_maps_to_api_without_status() {
        let err: CoreError = postsync_api::Error::Deserialization {
            message: "expected value".into(),
            body: "<html>".into(),
        }
        .into();
        assert_eq!(err.status(), None);
        assert!(err.to_string().contains("Unreadable response"));
    }
}
