/**
 * Backend Error Types
 *
 * This module defines the error type returned by HTTP handlers. Every
 * error renders as a JSON body of the shape `{"message": "..."}`, the
 * same shape the verification middleware uses for its rejections, so
 * clients only ever see one error format.
 */

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;
use thiserror::Error;

/// Errors produced by the authentication handlers
///
/// Each variant maps to a fixed HTTP status. The message carried by the
/// variant is the client-facing text; internal detail stays in the logs.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed or invalid request input
    #[error("{0}")]
    BadRequest(String),

    /// Credentials did not verify
    #[error("{0}")]
    Unauthorized(String),

    /// Resource conflict (e.g. email already registered)
    #[error("{0}")]
    Conflict(String),

    /// Unexpected server-side failure; detail is logged, not returned
    #[error("Server error")]
    Internal,
}

impl ApiError {
    /// Create a bad-request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    /// Create an unauthorized error
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized(message.into())
    }

    /// Create a conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    /// HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(json!({ "message": self.to_string() }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_mapping() {
        assert_eq!(
            ApiError::bad_request("bad").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::unauthorized("no").status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::conflict("taken").status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ApiError::Internal.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_message_text() {
        let error = ApiError::unauthorized("Invalid email or password");
        assert_eq!(error.to_string(), "Invalid email or password");
    }

    #[test]
    fn test_internal_error_hides_detail() {
        assert_eq!(ApiError::Internal.to_string(), "Server error");
    }

    #[test]
    fn test_into_response_status() {
        let response = ApiError::unauthorized("nope").into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
