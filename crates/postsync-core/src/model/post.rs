// ── Post domain type ──

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use postsync_api::{AuthorRef, NewPost, RemotePost};

use super::post_id::{AuthorId, PostId};
use super::reaction::Reactions;

/// A cached post record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub body: String,
    /// `None` when the author reference could not be coerced to a number.
    pub author_id: Option<AuthorId>,
    /// Used for display ordering only.
    pub created_at: DateTime<Utc>,
    pub reactions: Reactions,
}

impl Post {
    /// The full record as submitted to `PUT /posts/{id}`.
    pub fn to_wire(&self) -> RemotePost {
        RemotePost {
            id: self.id.as_remote(),
            title: self.title.clone(),
            body: self.body.clone(),
            user_id: self.author_id.map(|a| AuthorRef::Number(a.0)),
        }
    }
}

/// Input for creating a post.
///
/// `author` is kept as entered; coercion to a numeric [`AuthorId`]
/// happens when the creation is confirmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDraft {
    pub title: String,
    pub body: String,
    pub author: AuthorRef,
}

impl PostDraft {
    pub fn new(title: impl Into<String>, body: impl Into<String>, author: impl Into<AuthorRef>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            author: author.into(),
        }
    }

    pub(crate) fn to_wire(&self) -> NewPost {
        NewPost {
            title: self.title.clone(),
            body: self.body.clone(),
            user_id: self.author.clone(),
        }
    }

    /// Build a post that only exists locally, under a fresh client id.
    pub fn into_local_post(self, now: DateTime<Utc>) -> Post {
        Post {
            id: PostId::new_local(),
            author_id: self.author.coerce().map(AuthorId),
            title: self.title,
            body: self.body,
            created_at: now,
            reactions: Reactions::zero(),
        }
    }
}
