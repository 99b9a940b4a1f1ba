// Posts API HTTP client
//
// Wraps `reqwest::Client` with collection URL construction and JSON
// response handling. Endpoint methods live in `posts.rs` as inherent
// methods to keep this module focused on transport mechanics.

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::transport::TransportConfig;

/// Path segment of the managed collection.
const COLLECTION: &str = "posts";

/// Maximum number of body bytes quoted in error messages.
const BODY_PREVIEW: usize = 200;

/// Raw HTTP client for a REST-style posts collection.
///
/// No authentication and no pagination: every method is a single
/// request-response exchange against `{base_url}/posts[/{id}]`.
#[derive(Debug, Clone)]
pub struct PostsClient {
    http: reqwest::Client,
    base_url: Url,
}

impl PostsClient {
    /// Create a new client from a `TransportConfig`.
    ///
    /// `base_url` is the API root (e.g. `https://jsonplaceholder.typicode.com`).
    pub fn new(base_url: Url, transport: &TransportConfig) -> Result<Self, Error> {
        Ok(Self::with_client(transport.build_client()?, base_url))
    }

    /// Create a client with a pre-built `reqwest::Client`.
    pub fn with_client(http: reqwest::Client, base_url: Url) -> Self {
        Self { http, base_url }
    }

    // ── URL builders ─────────────────────────────────────────────────

    /// `{base}/posts`
    pub(crate) fn collection_url(&self) -> Result<Url, Error> {
        let base = self.base_url.as_str().trim_end_matches('/');
        Ok(Url::parse(&format!("{base}/{COLLECTION}"))?)
    }

    /// `{base}/posts/{id}`
    pub(crate) fn item_url(&self, id: &str) -> Result<Url, Error> {
        let base = self.base_url.as_str().trim_end_matches('/');
        Ok(Url::parse(&format!("{base}/{COLLECTION}/{id}"))?)
    }

    // ── Request helpers ──────────────────────────────────────────────

    pub(crate) async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T, Error> {
        debug!("GET {}", url);
        let resp = self.http.get(url).send().await?;
        Self::parse_json(resp).await
    }

    pub(crate) async fn post<T: DeserializeOwned>(
        &self,
        url: Url,
        body: &(impl Serialize + Sync),
    ) -> Result<T, Error> {
        debug!("POST {}", url);
        let resp = self.http.post(url).json(body).send().await?;
        Self::parse_json(resp).await
    }

    pub(crate) async fn put<T: DeserializeOwned>(
        &self,
        url: Url,
        body: &(impl Serialize + Sync),
    ) -> Result<T, Error> {
        debug!("PUT {}", url);
        let resp = self.http.put(url).json(body).send().await?;
        Self::parse_json(resp).await
    }

    /// Send a DELETE and return the status. The body carries no guarantees
    /// and is discarded.
    pub(crate) async fn delete(&self, url: Url) -> Result<reqwest::StatusCode, Error> {
        debug!("DELETE {}", url);
        let resp = self.http.delete(url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(Self::status_error(resp).await);
        }
        Ok(status)
    }

    // ── Response handling ────────────────────────────────────────────

    async fn parse_json<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, Error> {
        if !resp.status().is_success() {
            return Err(Self::status_error(resp).await);
        }

        let body = resp.text().await?;
        serde_json::from_str(&body).map_err(|e| Error::Deserialization {
            message: format!("{e} (body preview: {:?})", preview(&body)),
            body,
        })
    }

    async fn status_error(resp: reqwest::Response) -> Error {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        let message = if body.trim().is_empty() {
            status.canonical_reason().unwrap_or("unknown status").to_owned()
        } else {
            preview(&body).to_owned()
        };
        Error::Api {
            status: status.as_u16(),
            message,
        }
    }
}

/// Truncate to at most `BODY_PREVIEW` bytes on a char boundary.
fn preview(body: &str) -> &str {
    if body.len() <= BODY_PREVIEW {
        return body;
    }
    let mut end = BODY_PREVIEW;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    &body[..end]
}
