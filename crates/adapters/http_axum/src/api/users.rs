//! JSON REST handlers for users.

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use miniblog_app::ports::{PostRepository, UserRepository};
use miniblog_domain::user::User;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for creating a user.
#[derive(Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub age: i64,
    pub email: String,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<User>>),
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
    Ok(Json<User>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/v1/user`
pub async fn list<UR, PR>(State(state): State<AppState<UR, PR>>) -> Result<ListResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    PR: PostRepository + Send + Sync + 'static,
{
    let users = state.user_repo.get_all().await?;
    Ok(ListResponse::Ok(Json(users)))
}

/// `POST /api/v1/user`
pub async fn create<UR, PR>(
    State(state): State<AppState<UR, PR>>,
    Json(req): Json<CreateUserRequest>,
) -> Result<CreateResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    PR: PostRepository + Send + Sync + 'static,
{
    let user = User::builder()
        .name(req.name)
        .age(req.age)
        .email(req.email)
        .build();

    let created = state.user_repo.create(user).await?;
    Ok(CreateResponse::Ok(Json(created)))
}
