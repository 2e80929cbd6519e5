//! In-memory post repository - an insertion-ordered list behind an async lock.

use async_trait::async_trait;
use tokio::sync::RwLock;

use postboard_core::DomainError;
use postboard_core::domain::{NewPost, Post, PostFields};
use postboard_core::ports::PostRepository;

use super::IdGenerator;

struct Collection {
    posts: Vec<Post>,
    ids: IdGenerator,
}

impl Collection {
    fn position(&self, id: &str) -> Option<usize> {
        self.posts.iter().position(|post| post.id == id)
    }
}

/// In-memory post repository.
///
/// Each operation holds the lock for its whole read-modify-write, so a
/// request's mutation is applied in one step.
/// Note: Data is lost on process restart.
pub struct InMemoryPostRepository {
    store: RwLock<Collection>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(Collection {
                posts: Vec::new(),
                ids: IdGenerator::new(),
            }),
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn list(&self) -> Result<Vec<Post>, DomainError> {
        Ok(self.store.read().await.posts.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Post, DomainError> {
        let store = self.store.read().await;
        store
            .posts
            .iter()
            .find(|post| post.id == id)
            .cloned()
            .ok_or_else(|| DomainError::not_found(id))
    }

    async fn create(&self, new_post: NewPost) -> Result<Post, DomainError> {
        let mut store = self.store.write().await;
        let post = Post::from_new(store.ids.next_id(), new_post);
        store.posts.push(post.clone());

        tracing::debug!(post_id = %post.id, total = store.posts.len(), "Post created");
        Ok(post)
    }

    async fn update(&self, id: &str, fields: PostFields) -> Result<Post, DomainError> {
        let mut store = self.store.write().await;
        let index = store.position(id).ok_or_else(|| DomainError::not_found(id))?;

        let post = &mut store.posts[index];
        post.merge(fields);

        tracing::debug!(post_id = %id, "Post updated");
        Ok(post.clone())
    }

    async fn delete(&self, id: &str) -> Result<Post, DomainError> {
        let mut store = self.store.write().await;
        let index = store.position(id).ok_or_else(|| DomainError::not_found(id))?;
        let removed = store.posts.remove(index);

        tracing::debug!(post_id = %id, total = store.posts.len(), "Post deleted");
        Ok(removed)
    }

    async fn count(&self) -> usize {
        self.store.read().await.posts.len()
    }
}
