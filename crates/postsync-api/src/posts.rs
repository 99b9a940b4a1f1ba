// Posts collection endpoints
//
// `GET /posts`, `POST /posts`, `PUT /posts/{id}`, `DELETE /posts/{id}`.

use tracing::debug;

use crate::client::PostsClient;
use crate::error::Error;
use crate::models::{NewPost, RemotePost};

impl PostsClient {
    /// Read the full collection.
    ///
    /// `GET /posts`
    pub async fn list_posts(&self) -> Result<Vec<RemotePost>, Error> {
        let url = self.collection_url()?;
        let posts: Vec<RemotePost> = self.get(url).await?;
        debug!(count = posts.len(), "listed posts");
        Ok(posts)
    }

    /// Create one record. The server echoes the submitted fields and
    /// assigns an `id`.
    ///
    /// `POST /posts`
    pub async fn create_post(&self, draft: &NewPost) -> Result<RemotePost, Error> {
        let url = self.collection_url()?;
        debug!(title = %draft.title, "creating post");
        self.post(url, draft).await
    }

    /// Replace one record by id with the full submitted record.
    ///
    /// `PUT /posts/{id}`
    pub async fn update_post(&self, id: &str, post: &RemotePost) -> Result<RemotePost, Error> {
        let url = self.item_url(id)?;
        debug!(id, "updating post");
        self.put(url, post).await
    }

    /// Delete one record by id, returning the success status.
    ///
    /// `DELETE /posts/{id}`
    pub async fn delete_post(&self, id: &str) -> Result<reqwest::StatusCode, Error> {
        let url = self.item_url(id)?;
        debug!(id, "deleting post");
        self.delete(url).await
    }
}
