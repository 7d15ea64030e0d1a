//! Mapping from store errors to HTTP responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;

use flightdb::StoreError;

/// JSON body of every error response.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

/// An error response: a status code plus a one-line message.
///
/// The taxonomy mapping is: invalid-argument → 400, not-found → 404,
/// conflict → 409, unknown-reference → 422.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    /// A 400 invalid-argument response.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self { status: StatusCode::BAD_REQUEST, message: message.into() }
    }

    /// A 404 not-found response.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self { status: StatusCode::NOT_FOUND, message: message.into() }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        let status = match err {
            StoreError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            StoreError::AirlineNotFound(_) | StoreError::AirportNotFound(_) => {
                StatusCode::NOT_FOUND
            }
            StoreError::AirlineAlreadyExists(_) | StoreError::AirportAlreadyExists(_) => {
                StatusCode::CONFLICT
            }
            StoreError::UnknownAirlineReference(_) | StoreError::UnknownAirportReference(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
        };
        Self { status, message: err.to_string() }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorBody { error: self.message })).into_response()
    }
}
