//! Convenience result type alias for Watchlist.

use crate::error::AppError;

/// A specialized `Result` type for Watchlist operations.
pub type AppResult<T> = Result<T, AppError>;
