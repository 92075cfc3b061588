//! Post resource manager - the operations behind the `/posts` resource.

use std::sync::Arc;

use tracing::instrument;

use crate::domain::{Post, PostContent, PostDraft, PostPayload};
use crate::error::PostError;
use crate::ports::PostStore;

/// Validates post payloads, merges updates and maps store outcomes.
///
/// Holds nothing but the store handle, so it can be shared freely between
/// workers.
#[derive(Clone)]
pub struct PostManager {
    store: Arc<dyn PostStore>,
}

impl PostManager {
    pub fn new(store: Arc<dyn PostStore>) -> Self {
        Self { store }
    }

    /// Every stored post, in store order.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<Post>, PostError> {
        Ok(self.store.find_all().await?)
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: i32) -> Result<Post, PostError> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or(PostError::NotFound { id })
    }

    /// Store the payload as submitted, `userId` included.
    #[instrument(skip(self, payload))]
    pub async fn create(&self, payload: PostPayload) -> Result<Post, PostError> {
        let draft = PostDraft::try_from(payload)?;
        let post = self.store.save(draft).await?;
        tracing::debug!(post_id = post.id, "Post created");
        Ok(post)
    }

    /// Replace title and body of post `id`.
    ///
    /// The payload is validated before the store is touched, so blank input
    /// is reported as a validation failure even when `id` does not exist.
    #[instrument(skip(self, payload))]
    pub async fn update(&self, id: i32, payload: PostPayload) -> Result<Post, PostError> {
        let content = PostContent::try_from(payload)?;
        self.store
            .replace_content(id, content)
            .await?
            .ok_or(PostError::NotFound { id })
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), PostError> {
        self.store.delete_by_id(id).await?;
        Ok(())
    }
}
