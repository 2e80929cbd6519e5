use async_trait::async_trait;

use crate::domain::{NewPost, Post, PostFields};
use crate::error::DomainError;

/// Post repository - the collection of posts, ordered by insertion.
///
/// Lookups that miss fail with [`DomainError::NotFound`].
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Every post, oldest first.
    async fn list(&self) -> Result<Vec<Post>, DomainError>;

    /// Find a post by its id.
    async fn find_by_id(&self, id: &str) -> Result<Post, DomainError>;

    /// Assign a fresh id to `new_post` and append it to the collection.
    async fn create(&self, new_post: NewPost) -> Result<Post, DomainError>;

    /// Merge `fields` into the stored post and return the result.
    async fn update(&self, id: &str, fields: PostFields) -> Result<Post, DomainError>;

    /// Remove a post, returning it as it was just before removal.
    async fn delete(&self, id: &str) -> Result<Post, DomainError>;

    /// Number of posts currently held.
    async fn count(&self) -> usize;
}
