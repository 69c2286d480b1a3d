//! # watchlist-core
//!
//! Core crate for Watchlist. Contains configuration schemas, typed
//! identifiers, the typed rejections raised by the authentication and
//! validation flow, and the unified error system.
//!
//! This crate has **no** internal dependencies on other Watchlist crates.

pub mod config;
pub mod error;
pub mod result;
pub mod types;

pub use error::{AppError, AuthError, ErrorKind, NotFoundError, Rejection, ValidationError};
pub use result::AppResult;
