// ── Cache state ──
//
// Normalized entity storage and the lifecycle fields around it.

mod entity_store;
mod state;

pub(crate) use entity_store::EntityMap;
pub use entity_store::{EntityStore, display_order};
pub use state::{FetchStatus, PostsState};
