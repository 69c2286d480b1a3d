//! Catalog handlers: listing, create, edit, delete.

use axum::Json;
use axum::extract::{Form, Path, State};
use axum::response::Response;

use crate::dto::request::MovieForm;
use crate::dto::response::{ApiResponse, EditView, IndexView};
use crate::error::ApiError;
use crate::extractors::{Session, parse_movie_id};
use crate::flash::{INVALID_INPUT, ITEM_CREATED, ITEM_DELETED, ITEM_UPDATED, flash_redirect};
use crate::handlers::page_context;
use crate::state::AppState;

/// GET /
pub async fn index(
    State(state): State<AppState>,
    Session(ctx): Session,
) -> Result<Json<ApiResponse<IndexView>>, ApiError> {
    let movies = state.catalog.list_all().await?;
    let page = page_context(&state, &ctx).await?;
    Ok(Json(ApiResponse::ok(IndexView { page, movies })))
}

/// POST /
pub async fn create(
    State(state): State<AppState>,
    Session(ctx): Session,
    Form(form): Form<MovieForm>,
) -> Result<Response, ApiError> {
    match state.catalog.create(&ctx, form.into()).await {
        Ok(_) => Ok(flash_redirect(ITEM_CREATED, "/")),
        Err(e) if e.validation_error().is_some() => Ok(flash_redirect(INVALID_INPUT, "/")),
        Err(e) => Err(e.into()),
    }
}

/// GET /movie/edit/{id}
pub async fn edit_view(
    State(state): State<AppState>,
    Session(ctx): Session,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<EditView>>, ApiError> {
    let id = parse_movie_id(&id)?;
    let movie = state.catalog.edit_view(&ctx, id).await?;
    let page = page_context(&state, &ctx).await?;
    Ok(Json(ApiResponse::ok(EditView { page, movie })))
}

/// POST /movie/edit/{id}
pub async fn update(
    State(state): State<AppState>,
    Session(ctx): Session,
    Path(id): Path<String>,
    Form(form): Form<MovieForm>,
) -> Result<Response, ApiError> {
    let id = parse_movie_id(&id)?;
    match state.catalog.update(&ctx, id, form.into()).await {
        Ok(_) => Ok(flash_redirect(ITEM_UPDATED, "/")),
        Err(e) if e.validation_error().is_some() => {
            Ok(flash_redirect(INVALID_INPUT, &format!("/movie/edit/{id}")))
        }
        Err(e) => Err(e.into()),
    }
}

/// POST /movie/delete/{id}
pub async fn delete(
    State(state): State<AppState>,
    Session(ctx): Session,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let id = parse_movie_id(&id)?;
    state.catalog.delete(&ctx, id).await?;
    Ok(flash_redirect(ITEM_DELETED, "/"))
}
