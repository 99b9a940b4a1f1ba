// ── Outcome events ──
//
// Every state change is expressed as one `PostEvent`. Remote operations
// produce them on settlement; local intents construct them directly.

use chrono::{DateTime, Utc};

use crate::model::{Post, PostId, ReactionKind, RemotePost};

/// Result of a remote write that either named a record or did not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Confirmation<T> {
    /// The response identified the affected record.
    Confirmed(T),
    /// The server answered, but not usably (no id, unexpected status).
    Unusable { reason: String },
}

impl<T> Confirmation<T> {
    pub fn unusable(reason: impl Into<String>) -> Self {
        Self::Unusable {
            reason: reason.into(),
        }
    }

    pub fn is_confirmed(&self) -> bool {
        matches!(self, Self::Confirmed(_))
    }
}

/// All transitions the cache understands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostEvent {
    // ── Bulk fetch ───────────────────────────────────────────────────
    FetchPending,
    FetchSucceeded {
        items: Vec<RemotePost>,
        received_at: DateTime<Utc>,
    },
    FetchFailed {
        message: String,
    },

    // ── Remote writes ────────────────────────────────────────────────
    CreateSucceeded {
        post: RemotePost,
        received_at: DateTime<Utc>,
    },
    UpdateSucceeded {
        outcome: Confirmation<Post>,
        received_at: DateTime<Utc>,
    },
    RemoveSucceeded(Confirmation<PostId>),

    // ── Local only ───────────────────────────────────────────────────
    ReactionIncremented {
        post_id: PostId,
        kind: ReactionKind,
    },
    PostAdded(Post),
    CountIncreased,
}

impl PostEvent {
    /// Short name for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::FetchPending => "fetch_pending",
            Self::FetchSucceeded { .. } => "fetch_succeeded",
            Self::FetchFailed { .. } => "fetch_failed",
            Self::CreateSucceeded { .. } => "create_succeeded",
            Self::UpdateSucceeded { .. } => "update_succeeded",
            Self::RemoveSucceeded(_) => "remove_succeeded",
            Self::ReactionIncremented { .. } => "reaction_incremented",
            Self::PostAdded(_) => "post_added",
            Self::CountIncreased => "count_increased",
        }
    }
}
