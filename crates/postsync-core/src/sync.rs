// ── Remote synchronization ──
//
// Issues the four collection requests and turns each settled request
// into the `PostEvent` the mutator applies. Settlement timestamps are
// taken here, never in the mutator.

use chrono::Utc;
use tracing::{info, warn};

use postsync_api::{PostsClient, StatusCode};

use crate::config::ServiceConfig;
use crate::convert;
use crate::error::CoreError;
use crate::event::{Confirmation, PostEvent};
use crate::model::{Post, PostDraft, PostId};

/// Translates remote operations into outcome events.
#[derive(Debug, Clone)]
pub struct SyncController {
    client: PostsClient,
}

impl SyncController {
    pub fn new(client: PostsClient) -> Self {
        Self { client }
    }

    pub fn from_config(config: &ServiceConfig) -> Result<Self, CoreError> {
        let client = PostsClient::new(config.base_url.clone(), &config.transport())?;
        Ok(Self::new(client))
    }

    /// `GET /posts`. Failure becomes `FetchFailed` with the error text.
    pub async fn fetch_all(&self) -> PostEvent {
        match self.client.list_posts().await {
            Ok(items) => {
                info!(count = items.len(), "fetched posts");
                PostEvent::FetchSucceeded {
                    items,
                    received_at: Utc::now(),
                }
            }
            Err(e) => {
                warn!(error = %e, "fetch failed");
                PostEvent::FetchFailed {
                    message: e.to_string(),
                }
            }
        }
    }

    /// `POST /posts`. Failure is returned to the caller and produces no
    /// event.
    pub async fn create(&self, draft: &PostDraft) -> Result<PostEvent, CoreError> {
        let post = self.client.create_post(&draft.to_wire()).await?;
        Ok(PostEvent::CreateSucceeded {
            post,
            received_at: Utc::now(),
        })
    }

    /// `PUT /posts/{id}` with the full record.
    ///
    /// Fails open: when the request itself fails (network, timeout,
    /// non-success status) the submitted record is confirmed as-is. A
    /// response that arrives but cannot be read, or carries no id, is
    /// unusable.
    pub async fn update(&self, post: &Post) -> PostEvent {
        let id = post.id.to_string();
        let outcome = match self.client.update_post(&id, &post.to_wire()).await {
            Ok(response) => convert::update_confirmation(response, post),
            Err(e @ postsync_api::Error::Deserialization { .. }) => {
                Confirmation::unusable(e.to_string())
            }
            Err(e) => {
                warn!(%id, error = %e, "update request failed, keeping submitted record");
                Confirmation::Confirmed(post.clone())
            }
        };
        PostEvent::UpdateSucceeded {
            outcome,
            received_at: Utc::now(),
        }
    }

    /// `DELETE /posts/{id}`. Only an exact `200 OK` confirms removal.
    pub async fn remove(&self, id: &PostId) -> PostEvent {
        let outcome = match self.client.delete_post(&id.to_string()).await {
            Ok(StatusCode::OK) => Confirmation::Confirmed(id.clone()),
            Ok(status) => Confirmation::unusable(format!(
                "{}: {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unexpected status")
            )),
            Err(e) => Confirmation::unusable(e.to_string()),
        };
        PostEvent::RemoveSucceeded(outcome)
    }
}
