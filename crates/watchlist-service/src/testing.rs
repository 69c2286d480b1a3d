//! Shared fixture for service tests.

use std::sync::Arc;

use sqlx::SqlitePool;
use watchlist_auth::{
    CredentialStore, PasswordHasher, SessionContext, SessionManager, SessionStore,
};
use watchlist_core::config::{AuthConfig, DatabaseConfig, SessionConfig};
use watchlist_database::DatabasePool;
use watchlist_database::migration::run_migrations;
use watchlist_database::repositories::{MovieRepository, UserRepository};

use crate::catalog::CatalogService;
use crate::user::{AdminService, UserService};
use crate::validation::EntryValidator;

pub(crate) struct Fixture {
    pub catalog: CatalogService,
    pub users: UserService,
    pub admin: AdminService,
    pub sessions: SessionManager,
    pub pool: SqlitePool,
}

impl Fixture {
    /// Fresh database with the account `test`/`123` bootstrapped.
    pub async fn new() -> Self {
        let fx = Self::empty().await;
        fx.admin
            .bootstrap_admin("test", "123")
            .await
            .expect("bootstrap");
        fx
    }

    /// Fresh database with no account.
    pub async fn empty() -> Self {
        let db = DatabasePool::connect(&DatabaseConfig::in_memory())
            .await
            .expect("connect");
        run_migrations(db.pool()).await.expect("migrate");
        let pool = db.into_pool();

        let hasher = PasswordHasher::new(&AuthConfig::low_cost()).expect("hasher");
        let credentials = CredentialStore::new(UserRepository::new(pool.clone()), hasher);
        let movies = Arc::new(MovieRepository::new(pool.clone()));
        let validator = EntryValidator::new();

        Self {
            catalog: CatalogService::new(movies, validator),
            users: UserService::new(credentials.clone(), validator),
            admin: AdminService::new(pool.clone(), credentials.clone()),
            sessions: SessionManager::new(
                SessionStore::new(&SessionConfig::default()),
                credentials,
            ),
            pool,
        }
    }

    pub async fn anonymous(&self) -> SessionContext {
        self.sessions.resolve(None).await.0
    }

    pub async fn login(&self, username: &str, password: &str) -> SessionContext {
        let anon = self.anonymous().await;
        let token = self
            .sessions
            .login(&anon, username, password)
            .await
            .expect("login");
        self.sessions.resolve(Some(token.as_str())).await.0
    }
}
