// ── Runtime service configuration ──
//
// Describes where the post collection lives and how to talk to it.
// Never touches disk: the CLI builds a `ServiceConfig` from its
// layered config and hands it in.

use std::time::Duration;

use postsync_api::TransportConfig;
use url::Url;

/// Public JSON placeholder service serving `/posts`.
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Configuration for one remote post collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Base URL; the collection is at `{base_url}/posts`.
    pub base_url: Url,
    /// Request timeout.
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        let transport = TransportConfig::default();
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
            timeout: transport.timeout,
            user_agent: transport.user_agent,
        }
    }
}

impl ServiceConfig {
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            ..Self::default()
        }
    }

    /// Transport settings derived from this config.
    pub fn transport(&self) -> TransportConfig {
        TransportConfig {
            timeout: self.timeout,
            user_agent: self.user_agent.clone(),
        }
    }
}
