// ── Read-only views over PostsState ──
//
// Plain accessors plus one memoized derived view. None of these mutate
// the state or allocate beyond the returned value.

use std::sync::Arc;

use arc_swap::ArcSwapOption;

use crate::model::{AuthorId, Post, PostId};
use crate::store::{EntityMap, FetchStatus, PostsState};

/// All posts in display order.
pub fn select_all(state: &PostsState) -> Vec<Arc<Post>> {
    state.posts.all()
}

/// Ids in display order.
pub fn select_ids(state: &PostsState) -> &[PostId] {
    state.posts.ids()
}

pub fn select_by_id<'a>(state: &'a PostsState, id: &PostId) -> Option<&'a Arc<Post>> {
    state.posts.get(id)
}

pub fn select_status(state: &PostsState) -> FetchStatus {
    state.status
}

pub fn select_error(state: &PostsState) -> Option<&str> {
    state.error.as_deref()
}

pub fn select_count(state: &PostsState) -> u64 {
    state.count
}

/// Last computed author view, keyed on the identity of the entity map it
/// was derived from.
struct AuthorMemo {
    source: Arc<EntityMap>,
    author: AuthorId,
    posts: Arc<[Arc<Post>]>,
}

/// Memoized "posts by author" view.
///
/// Returns the same `Arc` (pointer-equal) for repeated calls while both
/// the entity map and the author are unchanged. Transitions that leave
/// the map alone (status changes, no-op removes) keep the memo valid.
/// Posts whose author could not be coerced to a number never match.
#[derive(Default)]
pub struct PostsByAuthor {
    memo: ArcSwapOption<AuthorMemo>,
}

impl PostsByAuthor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&self, state: &PostsState, author: AuthorId) -> Arc<[Arc<Post>]> {
        let source = state.posts.entity_map();
        if let Some(memo) = self.memo.load().as_ref() {
            if memo.author == author && Arc::ptr_eq(&memo.source, source) {
                return Arc::clone(&memo.posts);
            }
        }

        let posts: Arc<[Arc<Post>]> = state
            .posts
            .all()
            .into_iter()
            .filter(|post| post.author_id == Some(author))
            .collect();
        self.memo.store(Some(Arc::new(AuthorMemo {
            source: Arc::clone(source),
            author,
            posts: Arc::clone(&posts),
        })));
        posts
    }
}

impl std::fmt::Debug for PostsByAuthor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let memo = self.memo.load();
        f.debug_struct("PostsByAuthor")
            .field("cached_author", &memo.as_ref().map(|m| m.author))
            .finish()
    }
}
