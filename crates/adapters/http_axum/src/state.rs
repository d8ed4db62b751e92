//! Shared application state for axum handlers.

use std::sync::Arc;

use miniblog_app::ports::{PostRepository, UserRepository};

/// Application state shared across all axum handlers.
///
/// Generic over the repository types to avoid dynamic dispatch.
/// `Clone` is implemented manually so the underlying types themselves do not
/// need to be `Clone` — only the `Arc` wrappers are cloned.
pub struct AppState<UR, PR> {
    /// User persistence.
    pub user_repo: Arc<UR>,
    /// Post persistence.
    pub post_repo: Arc<PR>,
}

impl<UR, PR> Clone for AppState<UR, PR> {
    fn clone(&self) -> Self {
        Self {
            user_repo: Arc::clone(&self.user_repo),
            post_repo: Arc::clone(&self.post_repo),
        }
    }
}

impl<UR, PR> AppState<UR, PR>
where
    UR: UserRepository + Send + Sync + 'static,
    PR: PostRepository + Send + Sync + 'static,
{
    /// Create a new application state from repository instances.
    pub fn new(user_repo: UR, post_repo: PR) -> Self {
        Self {
            user_repo: Arc::new(user_repo),
            post_repo: Arc::new(post_repo),
        }
    }
}
