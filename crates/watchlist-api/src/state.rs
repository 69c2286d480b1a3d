//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use watchlist_auth::{CredentialStore, PasswordHasher, SessionManager, SessionStore};
use watchlist_core::config::AppConfig;
use watchlist_core::result::AppResult;
use watchlist_database::DatabasePool;
use watchlist_database::repositories::{MovieRepository, UserRepository};
use watchlist_service::{CatalogService, EntryValidator, UserService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// SQLite connection pool
    pub db: DatabasePool,
    /// Session lifecycle and login
    pub sessions: Arc<SessionManager>,
    /// Movie catalog use cases
    pub catalog: Arc<CatalogService>,
    /// Owner lookups and settings
    pub users: Arc<UserService>,
    /// When this state was built, reported as uptime
    pub started_at: DateTime<Utc>,
}

impl AppState {
    /// Wires repositories, auth and services over an open database.
    pub fn new(config: AppConfig, db: DatabasePool) -> AppResult<Self> {
        let pool = db.pool().clone();

        let hasher = PasswordHasher::new(&config.auth)?;
        let credentials = CredentialStore::new(UserRepository::new(pool.clone()), hasher);
        let movies = Arc::new(MovieRepository::new(pool));
        let validator = EntryValidator::new();

        let sessions = SessionManager::new(
            SessionStore::new(&config.session),
            credentials.clone(),
        );

        Ok(Self {
            config: Arc::new(config),
            db,
            sessions: Arc::new(sessions),
            catalog: Arc::new(CatalogService::new(movies, validator)),
            users: Arc::new(UserService::new(credentials, validator)),
            started_at: Utc::now(),
        })
    }
}
