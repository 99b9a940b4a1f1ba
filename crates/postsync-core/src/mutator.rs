// ── State transitions ──
//
// `PostsState::apply` is the only way the cache changes. Each arm is a
// total, synchronous transition: no I/O, no clock reads, no panics.
// Timestamps arrive inside the events.

use chrono::{DateTime, Duration, Utc};
use tracing::{debug, trace, warn};

use crate::convert;
use crate::event::{Confirmation, PostEvent};
use crate::model::{Post, PostId, ReactionKind, Reactions, RemotePost};
use crate::store::{FetchStatus, PostsState};

/// Spacing between synthetic timestamps of consecutively fetched items.
pub const FETCH_STAMP_STEP_SECS: i64 = 60;

/// Synthetic `created_at` for the item at `index` of a fetched batch:
/// `received_at - (index + 1) * FETCH_STAMP_STEP_SECS`.
pub fn fetch_stamp(received_at: DateTime<Utc>, index: usize) -> DateTime<Utc> {
    i64::try_from(index)
        .ok()
        .and_then(|i| i.checked_add(1))
        .and_then(|n| n.checked_mul(FETCH_STAMP_STEP_SECS))
        .and_then(Duration::try_seconds)
        .and_then(|offset| received_at.checked_sub_signed(offset))
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

impl PostsState {
    /// Apply one event, returning the next state.
    pub fn apply(self, event: PostEvent) -> Self {
        trace!(event = event.kind(), "applying event");
        match event {
            PostEvent::FetchPending => Self {
                status: FetchStatus::Loading,
                ..self
            },
            PostEvent::FetchSucceeded { items, received_at } => {
                self.fetch_succeeded(items, received_at)
            }
            PostEvent::FetchFailed { message } => Self {
                status: FetchStatus::Failed,
                error: Some(message),
                ..self
            },
            PostEvent::CreateSucceeded { post, received_at } => {
                self.create_succeeded(post, received_at)
            }
            PostEvent::UpdateSucceeded {
                outcome,
                received_at,
            } => self.update_succeeded(outcome, received_at),
            PostEvent::RemoveSucceeded(outcome) => self.remove_succeeded(outcome),
            PostEvent::ReactionIncremented { post_id, kind } => {
                self.reaction_incremented(&post_id, kind)
            }
            PostEvent::PostAdded(post) => Self {
                posts: self.posts.add_one(post),
                ..self
            },
            PostEvent::CountIncreased => Self {
                count: self.count.saturating_add(1),
                ..self
            },
        }
    }

    // ── Per-event transitions ────────────────────────────────────────

    fn fetch_succeeded(self, items: Vec<RemotePost>, received_at: DateTime<Utc>) -> Self {
        let total = items.len();
        let loaded: Vec<Post> = items
            .into_iter()
            .enumerate()
            .filter_map(|(index, remote)| {
                convert::ingest(remote, fetch_stamp(received_at, index), Reactions::zero())
            })
            .collect();
        if loaded.len() != total {
            warn!(
                skipped = total - loaded.len(),
                "fetched records without an id were skipped"
            );
        }
        debug!(count = loaded.len(), "fetched posts loaded");

        Self {
            posts: self.posts.upsert_many(loaded),
            status: FetchStatus::Succeeded,
            error: None,
            ..self
        }
    }

    fn create_succeeded(self, remote: RemotePost, received_at: DateTime<Utc>) -> Self {
        match convert::ingest(remote, received_at, Reactions::zero()) {
            Some(post) => {
                debug!(id = %post.id, "created post added");
                Self {
                    posts: self.posts.add_one(post),
                    ..self
                }
            }
            None => {
                warn!("create could not complete: response carried no id");
                self
            }
        }
    }

    fn update_succeeded(self, outcome: Confirmation<Post>, received_at: DateTime<Utc>) -> Self {
        match outcome {
            Confirmation::Confirmed(post) => {
                debug!(id = %post.id, "update applied");
                Self {
                    posts: self.posts.upsert_one(Post {
                        created_at: received_at,
                        ..post
                    }),
                    ..self
                }
            }
            Confirmation::Unusable { reason } => {
                warn!(%reason, "update could not complete");
                self
            }
        }
    }

    fn remove_succeeded(self, outcome: Confirmation<PostId>) -> Self {
        match outcome {
            Confirmation::Confirmed(id) => {
                debug!(%id, "post removed");
                Self {
                    posts: self.posts.remove_one(&id),
                    ..self
                }
            }
            Confirmation::Unusable { reason } => {
                warn!(%reason, "delete could not complete");
                self
            }
        }
    }

    fn reaction_incremented(self, post_id: &PostId, kind: ReactionKind) -> Self {
        if !self.posts.contains(post_id) {
            trace!(%post_id, "reaction for unknown post ignored");
            return self;
        }
        Self {
            posts: self
                .posts
                .modify_reactions(post_id, |reactions| reactions.increment(kind)),
            ..self
        }
    }
}
