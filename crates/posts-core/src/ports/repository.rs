use async_trait::async_trait;

use crate::domain::{Post, PostContent, PostDraft};
use crate::error::RepoError;

/// Post store - abstraction over persistence backends (Postgres, in-memory).
#[async_trait]
pub trait PostStore: Send + Sync {
    /// All stored posts, in store-defined order.
    async fn find_all(&self) -> Result<Vec<Post>, RepoError>;

    /// Find a post by its unique ID.
    async fn find_by_id(&self, id: i32) -> Result<Option<Post>, RepoError>;

    /// Insert or replace by identity. Assigns an ID when the draft has none.
    async fn save(&self, draft: PostDraft) -> Result<Post, RepoError>;

    /// Delete a post by its ID. Deleting a missing ID is not an error.
    async fn delete_by_id(&self, id: i32) -> Result<(), RepoError>;

    /// Replace title and body of an existing post, keeping everything else.
    ///
    /// Returns `None` when no post has this ID. The provided body is a plain
    /// read followed by a save, so a concurrent writer between the two calls
    /// wins or loses by arrival order.
    async fn replace_content(
        &self,
        id: i32,
        content: PostContent,
    ) -> Result<Option<Post>, RepoError> {
        let Some(existing) = self.find_by_id(id).await? else {
            return Ok(None);
        };
        self.save(existing.merge(content)).await.map(Some)
    }
}
