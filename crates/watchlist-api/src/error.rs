//! Maps domain `AppError` to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use serde::{Deserialize, Serialize};

use watchlist_core::error::{AppError, AuthError, ErrorKind};

use crate::flash::{Flash, LOGIN_REQUIRED};

/// Body of every not-found response.
pub const NOT_FOUND_MESSAGE: &str = "Page Not Found - 404";

/// Standard API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Machine-readable error code.
    pub error: String,
    /// Human-readable message.
    pub message: String,
}

impl ApiErrorResponse {
    pub fn new(error: &str, message: impl Into<String>) -> Self {
        Self {
            error: error.to_string(),
            message: message.into(),
        }
    }

    /// The response for unknown routes and missing entries.
    pub fn not_found() -> (StatusCode, Json<Self>) {
        (
            StatusCode::NOT_FOUND,
            Json(Self::new("NOT_FOUND", NOT_FOUND_MESSAGE)),
        )
    }
}

/// Handler-side wrapper so `AppError` can become a response.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;

        if err.auth_error() == Some(AuthError::Unauthenticated) {
            return (Flash::new(LOGIN_REQUIRED), Redirect::to("/login")).into_response();
        }

        let (status, error_code) = match err.kind {
            ErrorKind::NotFound => return ApiErrorResponse::not_found().into_response(),
            ErrorKind::Validation => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            ErrorKind::Authentication => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED"),
            ErrorKind::Conflict => (StatusCode::CONFLICT, "CONFLICT"),
            ErrorKind::Internal
            | ErrorKind::Database
            | ErrorKind::Configuration
            | ErrorKind::Serialization => {
                tracing::error!(kind = %err.kind, error = %err.message, "Internal server error");
                let body = ApiErrorResponse::new("INTERNAL_ERROR", "Internal server error");
                return (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response();
            }
        };

        (status, Json(ApiErrorResponse::new(error_code, err.message))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header::LOCATION;
    use watchlist_core::error::{NotFoundError, ValidationError};

    #[test]
    fn test_unauthenticated_redirects_to_login_with_flash() {
        let response = ApiError::from(AuthError::Unauthenticated).into_response();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[LOCATION], "/login");
        assert_eq!(
            response.extensions().get::<Flash>(),
            Some(&Flash::new(LOGIN_REQUIRED))
        );
    }

    #[test]
    fn test_status_mapping() {
        let cases: [(AppError, StatusCode); 4] = [
            (NotFoundError::EntryNotFound(1).into(), StatusCode::NOT_FOUND),
            (ValidationError::TitleEmpty.into(), StatusCode::BAD_REQUEST),
            (AuthError::InvalidCredential.into(), StatusCode::UNAUTHORIZED),
            (AppError::database("boom"), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, status) in cases {
            assert_eq!(ApiError(err).into_response().status(), status);
        }
    }
}
