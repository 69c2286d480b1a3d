//! Typed path parameter helpers.

use watchlist_core::error::AppError;
use watchlist_core::types::MovieId;

/// Parses a movie id from a path segment. Anything but an integer is a
/// missing page.
pub fn parse_movie_id(s: &str) -> Result<MovieId, AppError> {
    s.parse::<MovieId>()
        .map_err(|_| AppError::not_found(format!("Invalid movie id: {s}")))
}
