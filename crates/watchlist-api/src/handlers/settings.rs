//! Owner settings handlers.

use axum::Json;
use axum::extract::{Form, State};
use axum::response::Response;

use watchlist_auth::require_session;
use watchlist_core::error::AppError;

use crate::dto::request::SettingsForm;
use crate::dto::response::{ApiResponse, SettingsView};
use crate::error::ApiError;
use crate::extractors::Session;
use crate::flash::{INVALID_INPUT, SETTINGS_UPDATED, flash_redirect};
use crate::handlers::page_context;
use crate::state::AppState;

/// GET /settings
pub async fn settings_view(
    State(state): State<AppState>,
    Session(ctx): Session,
) -> Result<Json<ApiResponse<SettingsView>>, ApiError> {
    require_session(&ctx)?;
    let user = state
        .users
        .current(&ctx)
        .await?
        .ok_or_else(|| AppError::not_found("Logged-in account no longer exists"))?;
    let page = page_context(&state, &ctx).await?;
    Ok(Json(ApiResponse::ok(SettingsView {
        page,
        name: user.name,
    })))
}

/// POST /settings
pub async fn update_settings(
    State(state): State<AppState>,
    Session(ctx): Session,
    Form(form): Form<SettingsForm>,
) -> Result<Response, ApiError> {
    match state.users.update_settings(&ctx, &form.name).await {
        Ok(()) => Ok(flash_redirect(SETTINGS_UPDATED, "/")),
        Err(e) if e.validation_error().is_some() => Ok(flash_redirect(INVALID_INPUT, "/settings")),
        Err(e) => Err(e.into()),
    }
}
