//! Movie entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use watchlist_core::types::MovieId;

/// A movie entry in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Movie {
    /// Identifier assigned on creation.
    pub id: MovieId,
    /// Title, at most 60 characters.
    pub title: String,
    /// Release year as entered.
    pub year: String,
}

/// The writable fields of a movie entry.
///
/// Used for both creation and overwrite; the caller validates it first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieFields {
    /// Title.
    pub title: String,
    /// Year.
    pub year: String,
}

impl MovieFields {
    /// Convenience constructor.
    pub fn new(title: impl Into<String>, year: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            year: year.into(),
        }
    }
}
