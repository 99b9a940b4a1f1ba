// postsync-core: normalized post cache between postsync-api and consumers (CLI).

pub mod config;
mod convert;
pub mod error;
pub mod event;
pub mod model;
mod mutator;
pub mod selectors;
pub mod service;
pub mod store;
pub mod stream;
pub mod sync;

// ── Primary re-exports ──────────────────────────────────────────────
pub use config::{DEFAULT_BASE_URL, ServiceConfig};
pub use error::CoreError;
pub use event::{Confirmation, PostEvent};
pub use mutator::{FETCH_STAMP_STEP_SECS, fetch_stamp};
pub use selectors::{
    PostsByAuthor, select_all, select_by_id, select_count, select_error, select_ids,
    select_status,
};
pub use service::PostsService;
pub use store::{EntityStore, FetchStatus, PostsState, display_order};
pub use stream::{StateStream, StateWatchStream};
pub use sync::SyncController;

// Re-export model types at the crate root for ergonomics.
pub use model::{
    AuthorId, AuthorRef, InvalidPostId, Post, PostDraft, PostId, ReactionKind, Reactions,
    RemotePost,
};
