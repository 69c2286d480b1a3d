//! Administrative bootstrap: schema setup, demo data, and the admin account.

use sqlx::SqlitePool;
use tracing::info;

use watchlist_auth::{AdminBootstrap, CredentialStore, SessionToken};
use watchlist_core::error::{AppError, ErrorKind};
use watchlist_core::result::AppResult;
use watchlist_database::migration::{drop_all, run_migrations};
use watchlist_database::repositories::{MovieRepository, UserRepository};
use watchlist_entity::movie::MovieFields;
use watchlist_entity::user::User;

/// Display name applied by [`AdminService::forge`].
pub const FORGE_OWNER_NAME: &str = "James Chen";

/// Login name used when forging demo data into an empty database.
pub const FORGE_USERNAME: &str = "admin";

/// Demo catalog inserted by [`AdminService::forge`].
pub const FORGE_MOVIES: [(&str, &str); 10] = [
    ("My Neighbor Totoro", "1988"),
    ("Dead Poets Society", "1989"),
    ("A Perfect World", "1993"),
    ("Leon", "1994"),
    ("Mahjong", "1996"),
    ("Swallowtail Butterfly", "1996"),
    ("King of Comedy", "1999"),
    ("Devils on the Doorstep", "1999"),
    ("WALL-E", "2008"),
    ("The Pork of Music", "2012"),
];

/// Summary of a forge run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForgeReport {
    /// Whether a placeholder account had to be created.
    pub created_owner: bool,
    /// Number of movies inserted.
    pub movies: usize,
}

/// Operator commands that run outside any session.
#[derive(Debug, Clone)]
pub struct AdminService {
    pool: SqlitePool,
    credentials: CredentialStore,
}

impl AdminService {
    /// Creates a new admin service.
    pub fn new(pool: SqlitePool, credentials: CredentialStore) -> Self {
        Self { pool, credentials }
    }

    /// Creates the schema, dropping every table first when `drop` is set.
    pub async fn init_database(&self, drop: bool) -> AppResult<()> {
        if drop {
            drop_all(&self.pool).await?;
            info!("Dropped all tables");
        }
        run_migrations(&self.pool).await
    }

    /// Seeds the owner's display name and the demo catalog.
    ///
    /// Without an account, a placeholder `admin` with an unguessable
    /// password is created; run the admin bootstrap to choose one. All
    /// writes commit together or not at all.
    pub async fn forge(&self) -> AppResult<ForgeReport> {
        run_migrations(&self.pool).await?;

        let placeholder = match self.credentials.owner().await? {
            Some(_) => None,
            None => {
                let password = SessionToken::generate();
                Some(
                    self.credentials
                        .new_account(FORGE_USERNAME, password.as_str())
                        .await?,
                )
            }
        };
        let created_owner = placeholder.is_some();

        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        if let Some(account) = &placeholder {
            UserRepository::create_with(&mut *tx, account).await?;
        }
        UserRepository::update_name_with(&mut *tx, User::SINGLETON_ID, FORGE_OWNER_NAME).await?;
        for (title, year) in FORGE_MOVIES {
            MovieRepository::create_with(&mut *tx, &MovieFields::new(title, year)).await?;
        }

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit demo data", e)
        })?;

        info!(movies = FORGE_MOVIES.len(), created_owner, "Demo data generated");
        Ok(ForgeReport {
            created_owner,
            movies: FORGE_MOVIES.len(),
        })
    }

    /// Whether the singleton account has been created.
    pub async fn has_owner(&self) -> AppResult<bool> {
        Ok(self.credentials.owner().await?.is_some())
    }

    /// Creates the admin account or resets its login name and password.
    pub async fn bootstrap_admin(&self, username: &str, password: &str) -> AppResult<AdminBootstrap> {
        self.credentials.bootstrap_admin(username, password).await
    }
}
