//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use miniblog_domain::error::MiniBlogError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    message: &'static str,
}

/// Maps [`MiniBlogError`] to an HTTP response.
///
/// Every failure collapses into the same generic
/// `500 {"message":"Internal Server Error"}` payload. The distinction
/// between connection, constraint and unknown failures is logged here
/// and never exposed to clients.
pub struct ApiError(MiniBlogError);

impl From<MiniBlogError> for ApiError {
    fn from(err: MiniBlogError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self.0, "request failed");

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorBody {
                message: "Internal Server Error",
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_constraint_failure_to_internal_server_error() {
        let err = MiniBlogError::Constraint(
            miniblog_domain::error::ConstraintKind::Unique,
            "duplicate".into(),
        );
        let response = ApiError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn should_map_connection_failure_to_internal_server_error() {
        let err = MiniBlogError::Connection("pool closed".into());
        let response = ApiError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn should_map_unknown_failure_to_internal_server_error() {
        let err = MiniBlogError::Unknown("mystery".into());
        let response = ApiError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
