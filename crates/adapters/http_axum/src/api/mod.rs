//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod posts;
#[allow(clippy::missing_errors_doc)]
pub mod users;

use axum::Router;
use axum::routing::{get, post};

use miniblog_app::ports::{PostRepository, UserRepository};

use crate::state::AppState;

/// Build the `/api/v1` sub-router.
pub fn routes<UR, PR>() -> Router<AppState<UR, PR>>
where
    UR: UserRepository + Send + Sync + 'static,
    PR: PostRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(index))
        // Users
        .route("/user", get(users::list::<UR, PR>).post(users::create::<UR, PR>))
        // Posts
        .route("/post", post(posts::create::<UR, PR>))
        .route("/post/{user_id}", get(posts::list_by_author::<UR, PR>))
}

/// `GET /api/v1/`
async fn index() -> &'static str {
    "Server is up and running"
}
