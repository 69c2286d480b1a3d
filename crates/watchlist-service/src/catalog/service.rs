//! Guarded create, edit and delete over the movie catalog.

use std::sync::Arc;

use tracing::info;

use watchlist_auth::{SessionContext, require_session};
use watchlist_core::result::AppResult;
use watchlist_core::types::MovieId;
use watchlist_database::repositories::MovieRepository;
use watchlist_entity::movie::{Movie, MovieFields};

use crate::validation::{EntryValidator, ValidationMode};

/// Catalog operations on behalf of a session.
#[derive(Debug, Clone)]
pub struct CatalogService {
    /// Movie repository.
    movies: Arc<MovieRepository>,
    /// Field rules.
    validator: EntryValidator,
}

impl CatalogService {
    /// Creates a new catalog service.
    pub fn new(movies: Arc<MovieRepository>, validator: EntryValidator) -> Self {
        Self { movies, validator }
    }

    /// Every entry in insertion order. Public.
    pub async fn list_all(&self) -> AppResult<Vec<Movie>> {
        self.movies.list_all().await
    }

    /// A single entry, or `EntryNotFound`.
    pub async fn get_or_fail(&self, id: MovieId) -> AppResult<Movie> {
        self.movies.get_or_fail(id).await
    }

    /// Adds a new entry.
    pub async fn create(&self, ctx: &SessionContext, fields: MovieFields) -> AppResult<Movie> {
        require_session(ctx)?;
        self.validator
            .validate_movie(&fields.title, &fields.year, ValidationMode::Create)?;

        let movie = self.movies.create(&fields).await?;
        info!(movie_id = %movie.id, title = %movie.title, "Movie created");
        Ok(movie)
    }

    /// Loads an entry for the edit view.
    pub async fn edit_view(&self, ctx: &SessionContext, id: MovieId) -> AppResult<Movie> {
        require_session(ctx)?;
        self.movies.get_or_fail(id).await
    }

    /// Overwrites the title and year of an entry.
    pub async fn update(
        &self,
        ctx: &SessionContext,
        id: MovieId,
        fields: MovieFields,
    ) -> AppResult<Movie> {
        require_session(ctx)?;
        self.movies.get_or_fail(id).await?;
        self.validator
            .validate_movie(&fields.title, &fields.year, ValidationMode::Edit)?;

        self.movies.update(id, &fields).await?;
        info!(movie_id = %id, "Movie updated");
        Ok(Movie {
            id,
            title: fields.title,
            year: fields.year,
        })
    }

    /// Removes an entry.
    pub async fn delete(&self, ctx: &SessionContext, id: MovieId) -> AppResult<()> {
        require_session(ctx)?;
        self.movies.get_or_fail(id).await?;

        self.movies.delete(id).await?;
        info!(movie_id = %id, "Movie deleted");
        Ok(())
    }
}
