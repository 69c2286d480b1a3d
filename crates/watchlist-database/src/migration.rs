//! Database migration runner.

use sqlx::SqlitePool;
use tracing::info;

use watchlist_core::error::{AppError, ErrorKind};

/// Tables owned by the application, in drop order.
const TABLES: [&str; 3] = ["movies", "users", "_sqlx_migrations"];

/// Run all pending database migrations.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), AppError> {
    info!("Running database migrations...");

    sqlx::migrate!("../../migrations")
        .run(pool)
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                format!("Failed to run migrations: {e}"),
                e,
            )
        })?;

    info!("Database migrations completed successfully");
    Ok(())
}

/// Drop every application table, including the migration ledger.
pub async fn drop_all(pool: &SqlitePool) -> Result<(), AppError> {
    for table in TABLES {
        sqlx::query(&format!("DROP TABLE IF EXISTS {table}"))
            .execute(pool)
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Database,
                    format!("Failed to drop table '{table}': {e}"),
                    e,
                )
            })?;
    }

    info!("Dropped all tables");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connection::DatabasePool;
    use watchlist_core::config::DatabaseConfig;

    async fn table_count(pool: &SqlitePool) -> i64 {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name IN ('users', 'movies')",
        )
        .fetch_one(pool)
        .await
        .expect("count tables")
    }

    #[tokio::test]
    async fn test_migrations_are_idempotent() {
        let db = DatabasePool::connect(&DatabaseConfig::in_memory())
            .await
            .expect("connect");
        run_migrations(db.pool()).await.expect("first run");
        run_migrations(db.pool()).await.expect("second run");
        assert_eq!(table_count(db.pool()).await, 2);
    }

    #[tokio::test]
    async fn test_drop_all_then_recreate() {
        let db = DatabasePool::connect(&DatabaseConfig::in_memory())
            .await
            .expect("connect");
        run_migrations(db.pool()).await.expect("migrate");
        drop_all(db.pool()).await.expect("drop");
        assert_eq!(table_count(db.pool()).await, 0);
        run_migrations(db.pool()).await.expect("re-migrate");
        assert_eq!(table_count(db.pool()).await, 2);
    }
}
