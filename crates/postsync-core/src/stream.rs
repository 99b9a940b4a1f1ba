// ── Reactive state streams ──
//
// Subscription type for consuming cache changes from a `PostsService`.

use std::pin::Pin;
use std::task::{Context, Poll};

use futures_core::Stream;
use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;

use crate::store::PostsState;

/// A subscription to the cache state.
///
/// Provides both point-in-time snapshot access and change notification
/// via [`changed`](Self::changed) or by converting to a `Stream`.
/// Snapshots are cheap clones that share entity storage with the service.
pub struct StateStream {
    current: PostsState,
    receiver: watch::Receiver<PostsState>,
}

impl StateStream {
    pub(crate) fn new(receiver: watch::Receiver<PostsState>) -> Self {
        let current = receiver.borrow().clone();
        Self { current, receiver }
    }

    /// The snapshot captured at creation or at the last `changed()`.
    pub fn current(&self) -> &PostsState {
        &self.current
    }

    /// The latest snapshot (may have changed since creation).
    pub fn latest(&self) -> PostsState {
        self.receiver.borrow().clone()
    }

    /// Wait for the next change, returning the new snapshot.
    /// Returns `None` once the service has been dropped.
    pub async fn changed(&mut self) -> Option<PostsState> {
        self.receiver.changed().await.ok()?;
        let snap = self.receiver.borrow_and_update().clone();
        self.current = snap.clone();
        Some(snap)
    }

    /// Convert into a `Stream`. The first item is the current state.
    pub fn into_stream(self) -> StateWatchStream {
        StateWatchStream {
            inner: WatchStream::new(self.receiver),
        }
    }
}

/// `Stream` adapter backed by a `watch::Receiver`.
pub struct StateWatchStream {
    inner: WatchStream<PostsState>,
}

impl Stream for StateWatchStream {
    type Item = PostsState;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        Pin::new(&mut self.inner).poll_next(cx)
    }
}
