// Wire models for the `/posts` collection.
//
// These mirror what the server sends and accepts. Every field is lenient
// on the way in: a response missing `id` still decodes, and the caller
// decides whether it is usable.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Author reference as it appears on the wire.
///
/// Servers echo back whatever the client submitted, so a `userId` that
/// came from a text field arrives as a JSON string rather than a number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AuthorRef {
    Number(u64),
    Text(String),
}

impl AuthorRef {
    /// Coerce to a numeric author id. Text is trimmed and parsed as an
    /// unsigned integer; anything else yields `None`.
    pub fn coerce(&self) -> Option<u64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(s) => s.trim().parse().ok(),
        }
    }
}

impl fmt::Display for AuthorRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<u64> for AuthorRef {
    fn from(n: u64) -> Self {
        Self::Number(n)
    }
}

impl From<String> for AuthorRef {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for AuthorRef {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

/// A post record as returned by `GET /posts`, `POST /posts`, and
/// `PUT /posts/{id}`, and as submitted to `PUT`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemotePost {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub body: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<AuthorRef>,
}

/// Treat an explicit JSON `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Request body for `POST /posts`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPost {
    pub title: String,
    pub body: String,
    pub user_id: AuthorRef,
}
