//! Route definitions for the Watchlist HTTP interface.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{get, post},
};

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the Axum router with all routes and per-request middleware.
pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.server.body_limit_bytes;

    Router::new()
        .merge(catalog_routes())
        .merge(auth_routes())
        .merge(settings_routes())
        .route("/health", get(handlers::health::health))
        .fallback(handlers::fallback::not_found)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::session::session_layer,
        ))
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Listing, create, edit and delete.
fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::catalog::index).post(handlers::catalog::create),
        )
        .route(
            "/movie/edit/{id}",
            get(handlers::catalog::edit_view).post(handlers::catalog::update),
        )
        .route("/movie/delete/{id}", post(handlers::catalog::delete))
}

/// Login and logout.
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/login",
            get(handlers::auth::login_view).post(handlers::auth::login),
        )
        .route("/logout", get(handlers::auth::logout))
}

/// Owner settings.
fn settings_routes() -> Router<AppState> {
    Router::new().route(
        "/settings",
        get(handlers::settings::settings_view).post(handlers::settings::update_settings),
    )
}
