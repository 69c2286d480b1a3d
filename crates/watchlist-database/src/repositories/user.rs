//! Repository for the singleton user row.

use sqlx::{SqliteExecutor, SqlitePool};

use watchlist_core::error::{AppError, ErrorKind};
use watchlist_core::result::AppResult;
use watchlist_core::types::UserId;
use watchlist_entity::user::{NewUser, User};

/// Persistence for the one administrative account.
///
/// The `users` table admits a single row (`id = 1`); every lookup here
/// addresses that row explicitly rather than taking whichever comes first.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Fetch the singleton user, if it has been bootstrapped.
    pub async fn find_singleton(&self) -> AppResult<Option<User>> {
        self.find_by_id(User::SINGLETON_ID).await
    }

    /// Find a user by primary key.
    pub async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>(
            "SELECT id, name, username, password_hash FROM users WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find user by id", e))
    }

    /// Insert the singleton user.
    ///
    /// Fails with a conflict when the singleton already exists.
    pub async fn create(&self, data: &NewUser) -> AppResult<User> {
        Self::create_with(&self.pool, data).await
    }

    /// [`create`](Self::create) on a caller-supplied connection or transaction.
    pub async fn create_with<'e, E>(executor: E, data: &NewUser) -> AppResult<User>
    where
        E: SqliteExecutor<'e>,
    {
        sqlx::query_as::<_, User>(
            "INSERT INTO users (id, name, username, password_hash) VALUES (?, ?, ?, ?) \
             RETURNING id, name, username, password_hash",
        )
        .bind(User::SINGLETON_ID)
        .bind(&data.name)
        .bind(&data.username)
        .bind(&data.password_hash)
        .fetch_one(executor)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                AppError::conflict("The administrative user already exists")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create user", e),
        })
    }

    /// Overwrite the display name.
    pub async fn update_name(&self, id: UserId, name: &str) -> AppResult<bool> {
        Self::update_name_with(&self.pool, id, name).await
    }

    /// [`update_name`](Self::update_name) on a caller-supplied connection or transaction.
    pub async fn update_name_with<'e, E>(executor: E, id: UserId, name: &str) -> AppResult<bool>
    where
        E: SqliteExecutor<'e>,
    {
        let result = sqlx::query("UPDATE users SET name = ? WHERE id = ?")
            .bind(name)
            .bind(id)
            .execute(executor)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update name", e))?;
        Ok(result.rows_affected() > 0)
    }

    /// Overwrite the login name and password hash in one statement.
    pub async fn update_credentials(
        &self,
        id: UserId,
        username: &str,
        password_hash: &str,
    ) -> AppResult<bool> {
        let result = sqlx::query("UPDATE users SET username = ?, password_hash = ? WHERE id = ?")
            .bind(username)
            .bind(password_hash)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to update credentials", e)
            })?;
        Ok(result.rows_affected() > 0)
    }

    /// Overwrite the stored password hash.
    pub async fn update_password(&self, id: UserId, password_hash: &str) -> AppResult<bool> {
        let result = sqlx::query("UPDATE users SET password_hash = ? WHERE id = ?")
            .bind(password_hash)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to update password", e)
            })?;
        Ok(result.rows_affected() > 0)
    }

    /// Count users (0 or 1).
    pub async fn count(&self) -> AppResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count users", e))?;
        Ok(count as u64)
    }
}
