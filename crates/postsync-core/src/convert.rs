// ── Wire → domain conversion ──
//
// Normalizes `RemotePost` records into `Post`s: numeric author
// coercion, timestamp stamping, and reaction initialization.

use chrono::{DateTime, Utc};

use crate::event::Confirmation;
use crate::model::{AuthorId, AuthorRef, Post, PostId, Reactions, RemotePost};

pub(crate) fn coerce_author(author: Option<&AuthorRef>) -> Option<AuthorId> {
    author.and_then(AuthorRef::coerce).map(AuthorId)
}

/// Build a `Post` from a server record. Records without an id cannot be
/// keyed and yield `None`.
pub(crate) fn ingest(
    remote: RemotePost,
    created_at: DateTime<Utc>,
    reactions: Reactions,
) -> Option<Post> {
    let id = PostId::Remote(remote.id?);
    Some(Post {
        id,
        author_id: coerce_author(remote.user_id.as_ref()),
        title: remote.title,
        body: remote.body,
        created_at,
        reactions,
    })
}

/// Interpret a `PUT` response. The confirmed post carries the server's
/// fields and the submitted reactions; its timestamp is replaced when
/// the event is applied.
pub(crate) fn update_confirmation(response: RemotePost, submitted: &Post) -> Confirmation<Post> {
    ingest(response, submitted.created_at, submitted.reactions).map_or_else(
        || Confirmation::unusable("update response carried no id"),
        Confirmation::Confirmed,
    )
}
