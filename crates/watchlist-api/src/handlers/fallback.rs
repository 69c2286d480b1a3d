//! Unknown routes.

use axum::response::{IntoResponse, Response};

use crate::error::ApiErrorResponse;

/// Any path without a route.
pub async fn not_found() -> Response {
    ApiErrorResponse::not_found().into_response()
}
