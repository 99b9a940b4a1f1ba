// ── Domain model ──
//
// Canonical types for the post cache. Wire shapes live in `postsync-api`;
// conversion happens in `convert`.

mod post;
mod post_id;
mod reaction;

pub use post::{Post, PostDraft};
pub use post_id::{AuthorId, InvalidPostId, PostId};
pub use reaction::{ReactionKind, Reactions};

pub use postsync_api::{AuthorRef, RemotePost};
