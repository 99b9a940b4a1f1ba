//! Async HTTP client for a REST-style `/posts` collection.
//!
//! - **[`PostsClient`]** — wraps `reqwest::Client` with URL construction and
//!   JSON response handling for the four collection operations.
//! - **[`TransportConfig`]** — timeout and user agent used to build the
//!   underlying HTTP client.
//! - **Wire models** ([`RemotePost`], [`NewPost`], [`AuthorRef`]) — the
//!   shapes exchanged with the server, before any domain normalization.

pub mod client;
pub mod error;
pub mod models;
pub mod posts;
pub mod transport;

pub use client::PostsClient;
pub use error::Error;
pub use models::{AuthorRef, NewPost, RemotePost};
pub use reqwest::StatusCode;
pub use transport::TransportConfig;
