// ── Posts service ──
//
// Owns the cache state behind a watch channel, routes intents through
// the SyncController, and applies every resulting event in the order
// requests settle.

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::watch;
use tracing::{debug, info};

use crate::config::ServiceConfig;
use crate::error::CoreError;
use crate::event::PostEvent;
use crate::model::{AuthorId, Post, PostDraft, PostId, ReactionKind};
use crate::selectors::PostsByAuthor;
use crate::store::PostsState;
use crate::stream::StateStream;
use crate::sync::SyncController;

/// The main entry point for consumers.
///
/// Cheaply cloneable via `Arc<ServiceInner>`. Concurrent operations
/// are allowed; their events are applied in settlement order, so the
/// last request to resolve wins.
#[derive(Clone)]
pub struct PostsService {
    inner: Arc<ServiceInner>,
}

struct ServiceInner {
    config: ServiceConfig,
    sync: SyncController,
    state: watch::Sender<PostsState>,
    by_author: PostsByAuthor,
}

impl PostsService {
    /// Build a service talking to the collection described by `config`.
    pub fn new(config: ServiceConfig) -> Result<Self, CoreError> {
        let sync = SyncController::from_config(&config)?;
        Ok(Self::with_sync(config, sync))
    }

    pub fn with_sync(config: ServiceConfig, sync: SyncController) -> Self {
        let (state, _) = watch::channel(PostsState::init());
        Self {
            inner: Arc::new(ServiceInner {
                config,
                sync,
                state,
                by_author: PostsByAuthor::new(),
            }),
        }
    }

    // ── State access ─────────────────────────────────────────────────

    /// Snapshot of the current state.
    pub fn state(&self) -> PostsState {
        self.inner.state.borrow().clone()
    }

    pub fn subscribe(&self) -> StateStream {
        StateStream::new(self.inner.state.subscribe())
    }

    /// Posts by `author`, memoized across calls while the entity
    /// collection is unchanged.
    pub fn posts_by_author(&self, author: AuthorId) -> Arc<[Arc<Post>]> {
        let state = self.inner.state.borrow();
        self.inner.by_author.select(&state, author)
    }

    /// Apply one event and notify subscribers.
    pub fn dispatch(&self, event: PostEvent) {
        debug!(event = event.kind(), "dispatching");
        self.inner.state.send_modify(|state| {
            *state = std::mem::take(state).apply(event);
        });
    }

    // ── Remote operations ────────────────────────────────────────────

    /// Load the whole collection. Marks the fetch as loading, then
    /// applies the success or failure outcome.
    pub async fn fetch_all(&self) {
        self.dispatch(PostEvent::FetchPending);
        let event = self.inner.sync.fetch_all().await;
        self.dispatch(event);
    }

    /// Create on the server. Returns the id the server assigned, or
    /// `None` when the response carried none.
    pub async fn create(&self, draft: &PostDraft) -> Result<Option<PostId>, CoreError> {
        let event = self.inner.sync.create(draft).await?;
        let id = match &event {
            PostEvent::CreateSucceeded { post, .. } => post.id.map(PostId::Remote),
            _ => None,
        };
        if let Some(id) = &id {
            info!(%id, "post created");
        }
        self.dispatch(event);
        Ok(id)
    }

    /// Replace a post on the server. Returns whether the cache applied it.
    pub async fn update(&self, post: &Post) -> bool {
        let event = self.inner.sync.update(post).await;
        let applied = matches!(
            &event,
            PostEvent::UpdateSucceeded { outcome, .. } if outcome.is_confirmed()
        );
        self.dispatch(event);
        applied
    }

    /// Delete on the server. Returns whether the cache dropped the post.
    pub async fn remove(&self, id: &PostId) -> bool {
        let event = self.inner.sync.remove(id).await;
        let applied = matches!(&event, PostEvent::RemoveSucceeded(outcome) if outcome.is_confirmed());
        self.dispatch(event);
        applied
    }

    // ── Local operations ─────────────────────────────────────────────

    pub fn react(&self, post_id: PostId, kind: ReactionKind) {
        self.dispatch(PostEvent::ReactionIncremented { post_id, kind });
    }

    /// Like [`react`](Self::react) with the reaction given by name.
    /// Unknown names are ignored and return `false`.
    pub fn react_named(&self, post_id: PostId, name: &str) -> bool {
        match ReactionKind::lookup(name) {
            Some(kind) => {
                self.react(post_id, kind);
                true
            }
            None => {
                debug!(name, "unknown reaction ignored");
                false
            }
        }
    }

    /// Add a post that exists only in this cache, under a fresh local id.
    pub fn add_local(&self, draft: PostDraft) -> PostId {
        let post = draft.into_local_post(Utc::now());
        let id = post.id.clone();
        self.dispatch(PostEvent::PostAdded(post));
        id
    }

    pub fn increase_count(&self) {
        self.dispatch(PostEvent::CountIncreased);
    }
}

impl std::fmt::Debug for PostsService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PostsService")
            .field("base_url", &self.inner.config.base_url.as_str())
            .finish_non_exhaustive()
    }
}
