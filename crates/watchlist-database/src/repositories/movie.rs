//! Movie catalog repository.

use sqlx::{SqliteExecutor, SqlitePool};

use watchlist_core::error::{AppError, ErrorKind, NotFoundError};
use watchlist_core::result::AppResult;
use watchlist_core::types::MovieId;
use watchlist_entity::movie::{Movie, MovieFields};

/// Sole owner of the movie collection.
///
/// Writes here assume the payload was validated beforehand; the table only
/// enforces `NOT NULL`. Every operation is a single statement, so each is
/// atomic on its own and concurrent overwrites resolve as last write wins.
#[derive(Debug, Clone)]
pub struct MovieRepository {
    pool: SqlitePool,
}

impl MovieRepository {
    /// Create a new movie repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// All entries in insertion order.
    pub async fn list_all(&self) -> AppResult<Vec<Movie>> {
        sqlx::query_as::<_, Movie>("SELECT id, title, year FROM movies ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list movies", e))
    }

    /// Find an entry by id.
    pub async fn find_by_id(&self, id: MovieId) -> AppResult<Option<Movie>> {
        sqlx::query_as::<_, Movie>("SELECT id, title, year FROM movies WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find movie", e))
    }

    /// Find an entry by id, or fail with [`NotFoundError::EntryNotFound`].
    pub async fn get_or_fail(&self, id: MovieId) -> AppResult<Movie> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| NotFoundError::EntryNotFound(id.get()).into())
    }

    /// Persist a new entry and return it with its assigned id.
    pub async fn create(&self, fields: &MovieFields) -> AppResult<Movie> {
        Self::create_with(&self.pool, fields).await
    }

    /// [`create`](Self::create) on a caller-supplied connection or transaction.
    pub async fn create_with<'e, E>(executor: E, fields: &MovieFields) -> AppResult<Movie>
    where
        E: SqliteExecutor<'e>,
    {
        sqlx::query_as::<_, Movie>(
            "INSERT INTO movies (title, year) VALUES (?, ?) RETURNING id, title, year",
        )
        .bind(&fields.title)
        .bind(&fields.year)
        .fetch_one(executor)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create movie", e))
    }

    /// Overwrite title and year of an existing entry.
    pub async fn update(&self, id: MovieId, fields: &MovieFields) -> AppResult<()> {
        let result = sqlx::query("UPDATE movies SET title = ?, year = ? WHERE id = ?")
            .bind(&fields.title)
            .bind(&fields.year)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update movie", e))?;

        if result.rows_affected() == 0 {
            return Err(NotFoundError::EntryNotFound(id.get()).into());
        }
        Ok(())
    }

    /// Remove an entry.
    pub async fn delete(&self, id: MovieId) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM movies WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete movie", e))?;

        if result.rows_affected() == 0 {
            return Err(NotFoundError::EntryNotFound(id.get()).into());
        }
        Ok(())
    }

    /// Count entries.
    pub async fn count(&self) -> AppResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM movies")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count movies", e))?;
        Ok(count as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connection::DatabasePool;
    use crate::migration::run_migrations;
    use watchlist_core::config::DatabaseConfig;
    use watchlist_core::error::Rejection;

    async fn repo() -> MovieRepository {
        let db = DatabasePool::connect(&DatabaseConfig::in_memory())
            .await
            .expect("connect");
        run_migrations(db.pool()).await.expect("migrate");
        MovieRepository::new(db.into_pool())
    }

    #[tokio::test]
    async fn test_create_assigns_increasing_ids() {
        let repo = repo().await;
        let first = repo
            .create(&MovieFields::new("Leon", "1994"))
            .await
            .expect("create");
        let second = repo
            .create(&MovieFields::new("WALL-E", "2008"))
            .await
            .expect("create");

        assert_eq!(first.id, MovieId(1));
        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn test_list_all_preserves_insertion_order() {
        let repo = repo().await;
        for (title, year) in [("Mahjong", "1996"), ("Leon", "1994"), ("WALL-E", "2008")] {
            repo.create(&MovieFields::new(title, year))
                .await
                .expect("create");
        }

        let titles: Vec<String> = repo
            .list_all()
            .await
            .expect("list")
            .into_iter()
            .map(|m| m.title)
            .collect();
        assert_eq!(titles, ["Mahjong", "Leon", "WALL-E"]);
    }

    #[tokio::test]
    async fn test_get_or_fail_missing_entry() {
        let repo = repo().await;
        let err = repo.get_or_fail(MovieId(999)).await.unwrap_err();
        assert_eq!(
            err.rejection(),
            Some(Rejection::NotFound(NotFoundError::EntryNotFound(999)))
        );
    }

    #[tokio::test]
    async fn test_update_overwrites_fields() {
        let repo = repo().await;
        let movie = repo
            .create(&MovieFields::new("Test Movie Title", "2022"))
            .await
            .expect("create");

        repo.update(movie.id, &MovieFields::new("Edited", "2023"))
            .await
            .expect("update");

        let stored = repo.get_or_fail(movie.id).await.expect("get");
        assert_eq!(stored.title, "Edited");
        assert_eq!(stored.year, "2023");
    }

    #[tokio::test]
    async fn test_update_and_delete_missing_entry() {
        let repo = repo().await;
        let err = repo
            .update(MovieId(5), &MovieFields::new("Ghost", "2000"))
            .await
            .unwrap_err();
        assert!(err.is_not_found());

        let err = repo.delete(MovieId(5)).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_create_with_rolls_back_with_its_transaction() {
        let db = DatabasePool::connect(&DatabaseConfig::in_memory())
            .await
            .expect("connect");
        run_migrations(db.pool()).await.expect("migrate");

        let mut tx = db.pool().begin().await.expect("begin");
        MovieRepository::create_with(&mut *tx, &MovieFields::new("Leon", "1994"))
            .await
            .expect("create");
        tx.rollback().await.expect("rollback");

        let repo = MovieRepository::new(db.into_pool());
        assert_eq!(repo.count().await.expect("count"), 0);
    }

    #[tokio::test]
    async fn test_delete_removes_entry() {
        let repo = repo().await;
        let movie = repo
            .create(&MovieFields::new("Leon", "1994"))
            .await
            .expect("create");

        repo.delete(movie.id).await.expect("delete");
        assert_eq!(repo.count().await.expect("count"), 0);
        assert!(repo.find_by_id(movie.id).await.expect("find").is_none());
    }
}
