//! In-memory post store - used when no database is configured.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use posts_core::domain::{Post, PostDraft};
use posts_core::error::RepoError;
use posts_core::ports::PostStore;

struct State {
    posts: BTreeMap<i32, Post>,
    /// Next ID to hand out; `None` once the ID space is exhausted.
    next_id: Option<i32>,
}

impl State {
    fn claim(&mut self, id: i32) {
        if self.next_id.is_some_and(|next| id >= next) {
            self.next_id = id.checked_add(1);
        }
    }
}

/// In-memory store over an ordered map behind an async RwLock.
///
/// IDs are assigned from 1 upward and never reused, listing is in ID order.
/// Note: Data is lost on process restart.
pub struct InMemoryPostStore {
    state: RwLock<State>,
}

impl InMemoryPostStore {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(State {
                posts: BTreeMap::new(),
                next_id: Some(1),
            }),
        }
    }

    /// A store pre-populated with `posts`, keyed by their IDs.
    pub fn with_posts(posts: impl IntoIterator<Item = Post>) -> Self {
        let mut store = Self::new();
        {
            let state = store.state.get_mut();
            for post in posts {
                state.claim(post.id);
                state.posts.insert(post.id, post);
            }
        }
        store
    }
}

impl Default for InMemoryPostStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostStore for InMemoryPostStore {
    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        let state = self.state.read().await;
        Ok(state.posts.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Post>, RepoError> {
        let state = self.state.read().await;
        Ok(state.posts.get(&id).cloned())
    }

    async fn save(&self, draft: PostDraft) -> Result<Post, RepoError> {
        let mut state = self.state.write().await;

        let id = match draft.id {
            Some(id) => id,
            None => state
                .next_id
                .ok_or_else(|| RepoError::Constraint("post id sequence exhausted".to_string()))?,
        };
        state.claim(id);

        let post = Post {
            id,
            user_id: draft.user_id,
            title: draft.title,
            body: draft.body,
            version: draft.version,
        };
        state.posts.insert(id, post.clone());

        tracing::debug!(post_id = id, "Post saved in memory");
        Ok(post)
    }

    async fn delete_by_id(&self, id: i32) -> Result<(), RepoError> {
        let mut state = self.state.write().await;
        state.posts.remove(&id);
        Ok(())
    }
}
