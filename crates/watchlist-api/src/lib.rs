//! # watchlist-api
//!
//! HTTP layer for the Watchlist built on Axum.
//!
//! Form posts are answered with a flash message and a redirect; views are
//! JSON documents carrying what a template would render. The session
//! middleware resolves the caller's session before every handler and
//! writes back queued flashes and rotated tokens afterwards.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod flash;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use error::ApiError;
pub use state::AppState;
