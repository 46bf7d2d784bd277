//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use z407_domain::error::RemoteError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`RemoteError`] to an HTTP response with appropriate status code.
pub struct ApiError(RemoteError);

impl From<RemoteError> for ApiError {
    fn from(err: RemoteError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            RemoteError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            RemoteError::NotConnected => (StatusCode::SERVICE_UNAVAILABLE, self.0.to_string()),
            RemoteError::Device(err) => {
                tracing::error!(error = %err, "speaker command failed");
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
