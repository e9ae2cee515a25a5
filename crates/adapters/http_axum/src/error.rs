//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use advert_domain::error::AdvertError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`AdvertError`] to an HTTP response with appropriate status code.
///
/// Internal failures echo the underlying error message to the caller; this
/// keeps the original public contract of the API (see DESIGN.md for the
/// hardening trade-off).
pub struct ApiError(AdvertError);

impl From<AdvertError> for ApiError {
    fn from(err: AdvertError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            AdvertError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            AdvertError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
            AdvertError::Storage(_) | AdvertError::Publish(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, self.0.to_string())
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
