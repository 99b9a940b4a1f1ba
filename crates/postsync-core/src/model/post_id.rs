// ── Core identity types ──
//
// PostId and AuthorId form the foundation of every domain type.
// PostId unifies server-assigned numeric ids and client-generated ids
// behind a single ordered key.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

// ── PostId ──────────────────────────────────────────────────────────

/// Canonical identifier for a post.
///
/// Either a server-assigned integer or a UUID generated locally for posts
/// that have never been confirmed by the server. Ordering sorts all remote
/// ids (numerically) before local ones, which gives the display comparator
/// its deterministic tie-break.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PostId {
    Remote(u64),
    Local(Uuid),
}

impl PostId {
    /// Generate a fresh client-side identifier.
    pub fn new_local() -> Self {
        Self::Local(Uuid::new_v4())
    }

    pub fn as_remote(&self) -> Option<u64> {
        match self {
            Self::Remote(n) => Some(*n),
            Self::Local(_) => None,
        }
    }

    pub fn is_local(&self) -> bool {
        matches!(self, Self::Local(_))
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Remote(n) => write!(f, "{n}"),
            Self::Local(u) => write!(f, "{u}"),
        }
    }
}

/// Returned when a string is neither an unsigned integer nor a UUID.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid post id '{0}': expected an integer or a UUID")]
pub struct InvalidPostId(pub String);

impl FromStr for PostId {
    type Err = InvalidPostId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(n) = s.parse::<u64>() {
            return Ok(Self::Remote(n));
        }
        Uuid::parse_str(s)
            .map(Self::Local)
            .map_err(|_| InvalidPostId(s.to_owned()))
    }
}

// ── AuthorId ────────────────────────────────────────────────────────

/// Foreign key to a user record. Never checked against any user store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthorId(pub u64);

impl fmt::Display for AuthorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for AuthorId {
    fn from(n: u64) -> Self {
        Self(n)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn post_id_from_integer_string() {
        let id: PostId = "42".parse().unwrap();
        assert_eq!(id, PostId::Remote(42));
    }

    #[test]
    fn post_id_from_uuid_string() {
        let id: PostId = "550e8400-e29b-41d4-a716-446655440000".parse().unwrap();
        assert!(id.is_local());
    }

    #[test]
    fn post_id_rejects_garbage() {
        let err = "not-an-id".parse::<PostId>().unwrap_err();
        assert_eq!(err, InvalidPostId("not-an-id".into()));
    }

    #[test]
    fn remote_ids_sort_numerically_before_local() {
        let mut ids = vec![
            PostId::new_local(),
            PostId::Remote(10),
            PostId::Remote(2),
        ];
        ids.sort();
        assert_eq!(ids[0], PostId::Remote(2));
        assert_eq!(ids[1], PostId::Remote(10));
        assert!(ids[2].is_local());
    }

    #[test]
    fn post_id_serializes_untagged() {
        assert_eq!(serde_json::to_string(&PostId::Remote(7)).unwrap(), "7");
        let back: PostId = serde_json::from_str("7").unwrap();
        assert_eq!(back, PostId::Remote(7));
    }
}
