//! Extracts the session resolved by the session middleware.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use watchlist_auth::SessionContext;
use watchlist_core::error::AppError;

use crate::error::ApiError;

/// The caller's session context.
///
/// Present on every route mounted under the session middleware; missing
/// only if the router is assembled without it.
#[derive(Debug, Clone)]
pub struct Session(pub SessionContext);

impl<S> FromRequestParts<S> for Session
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<SessionContext>()
            .cloned()
            .map(Session)
            .ok_or_else(|| AppError::internal("Session middleware is not installed").into())
    }
}
