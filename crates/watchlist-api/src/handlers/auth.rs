//! Login and logout handlers.

use axum::Json;
use axum::extract::{Form, State};
use axum::response::{IntoResponse, Redirect, Response};

use watchlist_auth::require_session;
use watchlist_core::error::AuthError;

use crate::dto::request::LoginForm;
use crate::dto::response::{ApiResponse, LoginView};
use crate::error::ApiError;
use crate::extractors::Session;
use crate::flash::{
    Flash, GOODBYE, INVALID_CREDENTIALS, INVALID_INPUT, IssuedSession, LOGIN_SUCCESS,
    flash_redirect,
};
use crate::handlers::page_context;
use crate::state::AppState;

/// GET /login
pub async fn login_view(
    State(state): State<AppState>,
    Session(ctx): Session,
) -> Result<Json<ApiResponse<LoginView>>, ApiError> {
    let page = page_context(&state, &ctx).await?;
    Ok(Json(ApiResponse::ok(LoginView { page })))
}

/// POST /login
pub async fn login(
    State(state): State<AppState>,
    Session(ctx): Session,
    Form(form): Form<LoginForm>,
) -> Result<Response, ApiError> {
    match state
        .sessions
        .login(&ctx, &form.username, &form.password)
        .await
    {
        Ok(token) => Ok((
            IssuedSession(token),
            Flash::new(LOGIN_SUCCESS),
            Redirect::to("/"),
        )
            .into_response()),
        Err(e) => match e.auth_error() {
            Some(AuthError::EmptyCredential) => Ok(flash_redirect(INVALID_INPUT, "/login")),
            Some(AuthError::InvalidCredential) => {
                Ok(flash_redirect(INVALID_CREDENTIALS, "/login"))
            }
            _ => Err(e.into()),
        },
    }
}

/// GET /logout
pub async fn logout(
    State(state): State<AppState>,
    Session(ctx): Session,
) -> Result<Response, ApiError> {
    require_session(&ctx)?;
    state.sessions.logout(&ctx).await;
    Ok(flash_redirect(GOODBYE, "/"))
}
