// ── Posts state ──
//
// The complete cache value: the entity collection plus the bulk-fetch
// lifecycle. Transitions live in `mutator.rs`.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display};

use super::entity_store::EntityStore;

/// Lifecycle of the bulk fetch. Create, update, and delete never touch it.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum FetchStatus {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed,
}

/// Cache state threaded through every transition and selector.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostsState {
    pub(crate) posts: EntityStore,
    pub(crate) status: FetchStatus,
    pub(crate) error: Option<String>,
    pub(crate) count: u64,
}

impl PostsState {
    /// Starting value: empty collection, `status = idle`, no error.
    pub fn init() -> Self {
        Self::default()
    }

    pub fn posts(&self) -> &EntityStore {
        &self.posts
    }

    pub fn status(&self) -> FetchStatus {
        self.status
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn count(&self) -> u64 {
        self.count
    }
}
