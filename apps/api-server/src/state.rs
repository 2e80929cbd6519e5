//! Application state - shared across all handlers.

use std::sync::Arc;

use postboard_core::ports::PostRepository;
use postboard_infra::InMemoryPostRepository;

/// Shared application state.
///
/// Owns the post collection for the lifetime of the server.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
}

impl AppState {
    /// Build the application state around an empty in-memory collection.
    pub fn new() -> Self {
        let state = Self::with_repository(Arc::new(InMemoryPostRepository::new()));
        tracing::info!("Application state initialized");
        state
    }

    pub fn with_repository(posts: Arc<dyn PostRepository>) -> Self {
        Self { posts }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
