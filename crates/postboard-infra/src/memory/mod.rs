//! In-memory storage.

mod id;
mod post_repo;

use id::IdGenerator;
pub use post_repo::InMemoryPostRepository;
