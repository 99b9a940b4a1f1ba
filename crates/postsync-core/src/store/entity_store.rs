// ── Normalized post collection ──
//
// Id-keyed storage plus a display order that is recomputed from the
// entities after every mutation. Both halves sit behind `Arc` so an
// unchanged collection keeps its allocation across state transitions,
// which is what the memoized selectors compare against.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::Arc;

use crate::model::{Post, PostId, Reactions};

pub(crate) type EntityMap = HashMap<PostId, Arc<Post>>;

/// Display comparator: newest `created_at` first, then ascending id.
pub fn display_order(a: &Post, b: &Post) -> Ordering {
    b.created_at
        .cmp(&a.created_at)
        .then_with(|| a.id.cmp(&b.id))
}

/// Immutable, normalized collection of posts.
///
/// Every mutating method consumes the store and returns the next value.
/// `order` always holds exactly the keys of `entities`, sorted by
/// [`display_order`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntityStore {
    order: Arc<Vec<PostId>>,
    entities: Arc<EntityMap>,
}

impl EntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Mutations ────────────────────────────────────────────────────

    /// Insert new ids and fully replace existing ones, then reorder.
    pub fn upsert_many(mut self, posts: impl IntoIterator<Item = Post>) -> Self {
        let mut posts = posts.into_iter().peekable();
        if posts.peek().is_none() {
            return self;
        }
        let entities = Arc::make_mut(&mut self.entities);
        for post in posts {
            entities.insert(post.id.clone(), Arc::new(post));
        }
        self.reorder()
    }

    pub fn upsert_one(self, post: Post) -> Self {
        self.upsert_many(std::iter::once(post))
    }

    /// Add a post expected to be new. A colliding id replaces the
    /// existing entry, exactly like [`upsert_one`](Self::upsert_one).
    pub fn add_one(self, post: Post) -> Self {
        self.upsert_one(post)
    }

    /// Remove by id. An absent id returns the store untouched.
    pub fn remove_one(mut self, id: &PostId) -> Self {
        if !self.entities.contains_key(id) {
            return self;
        }
        Arc::make_mut(&mut self.entities).remove(id);
        self.reorder()
    }

    /// Apply `f` to the reaction counters of the post with `id`, if
    /// present. Counters never take part in ordering, so `order` is kept.
    pub(crate) fn modify_reactions(mut self, id: &PostId, f: impl FnOnce(&mut Reactions)) -> Self {
        if !self.entities.contains_key(id) {
            return self;
        }
        if let Some(post) = Arc::make_mut(&mut self.entities).get_mut(id) {
            f(&mut Arc::make_mut(post).reactions);
        }
        self
    }

    // ── Reads ────────────────────────────────────────────────────────

    /// All posts in display order.
    pub fn all(&self) -> Vec<Arc<Post>> {
        self.order
            .iter()
            .filter_map(|id| self.entities.get(id).cloned())
            .collect()
    }

    pub fn get(&self, id: &PostId) -> Option<&Arc<Post>> {
        self.entities.get(id)
    }

    pub fn ids(&self) -> &[PostId] {
        &self.order
    }

    pub fn contains(&self, id: &PostId) -> bool {
        self.entities.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub(crate) fn entity_map(&self) -> &Arc<EntityMap> {
        &self.entities
    }

    // ── Private helpers ──────────────────────────────────────────────

    fn reorder(mut self) -> Self {
        let mut posts: Vec<&Arc<Post>> = self.entities.values().collect();
        posts.sort_by(|a, b| display_order(a, b));
        self.order = Arc::new(posts.into_iter().map(|p| p.id.clone()).collect());
        self
    }
}
