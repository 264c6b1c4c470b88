use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use mlife_derive::api_model;
use std::fmt;

#[api_model]
/// JSON body of every failed request
pub struct ErrorBody {
    /// Error kind, e.g. `InvalidInputError`
    pub error: String,
    /// Human readable description
    pub message: String,
}

/// Error returned by handlers; rendered as [`ErrorBody`] with its status code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    status: StatusCode,
    kind: &'static str,
    message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, kind: &'static str, message: impl Into<String>) -> Self {
        Self { status, kind, message: message.into() }
    }

    pub fn bad_request(kind: &'static str, message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, kind, message)
    }

    pub fn not_found(kind: &'static str, message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, kind, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "InternalError", message)
    }

    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    #[must_use]
    pub const fn kind(&self) -> &'static str {
        self.kind
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {}", self.kind, self.status, self.message)
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(kind = self.kind, message = %self.message, "Request failed");
        } else {
            tracing::debug!(kind = self.kind, status = %self.status, message = %self.message, "Request rejected");
        }

        let body = ErrorBody { error: self.kind.to_owned(), message: self.message };
        (self.status, Json(body)).into_response()
    }
}

impl From<super::state::ApiStateError> for ApiError {
    fn from(err: super::state::ApiStateError) -> Self {
        Self::internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_and_kind_survive_into_response() {
        let response = ApiError::not_found("UnknownParameterError", "no such parameter").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn body_uses_error_and_message_keys() {
        let body = ErrorBody { error: "InvalidInputError".to_owned(), message: "bad".to_owned() };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json, serde_json::json!({ "error": "InvalidInputError", "message": "bad" }));
    }
}
