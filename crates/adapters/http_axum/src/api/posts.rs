//! JSON REST handlers for posts.

use std::str::FromStr;

use axum::Json;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use miniblog_app::ports::{PostRepository, UserRepository};
use miniblog_domain::error::MiniBlogError;
use miniblog_domain::id::UserId;
use miniblog_domain::post::Post;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for creating a post.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    pub title: String,
    pub content: String,
    pub author_id: String,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Post>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Ok(Json<Post>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `POST /api/v1/post`
pub async fn create<UR, PR>(
    State(state): State<AppState<UR, PR>>,
    Json(req): Json<CreatePostRequest>,
) -> Result<CreateResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    PR: PostRepository + Send + Sync + 'static,
{
    let author_id = UserId::from_str(&req.author_id).map_err(MiniBlogError::from)?;

    let post = Post::builder()
        .title(req.title)
        .content(req.content)
        .author_id(author_id)
        .build();

    let created = state.post_repo.create(post).await?;
    Ok(CreateResponse::Ok(Json(created)))
}

/// `GET /api/v1/post/{user_id}`
pub async fn list_by_author<UR, PR>(
    State(state): State<AppState<UR, PR>>,
    Path(user_id): Path<String>,
) -> Result<ListResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    PR: PostRepository + Send + Sync + 'static,
{
    let author_id = UserId::from_str(&user_id).map_err(MiniBlogError::from)?;
    let posts = state.post_repo.find_by_author_id(author_id).await?;
    Ok(ListResponse::Ok(Json(posts)))
}
