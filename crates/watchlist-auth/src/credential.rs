//! Credential store for the singleton administrative account.
//!
//! Argon2 work runs on the blocking thread pool.

use tracing::{info, warn};

use watchlist_core::error::{AppError, AuthError};
use watchlist_core::result::AppResult;
use watchlist_core::types::UserId;
use watchlist_database::repositories::UserRepository;
use watchlist_entity::user::{NewUser, User};

use crate::password::PasswordHasher;

/// Display name given to an account created through the admin bootstrap.
pub const DEFAULT_ADMIN_NAME: &str = "Admin";

/// Outcome of [`CredentialStore::bootstrap_admin`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminBootstrap {
    /// No account existed; the singleton was created.
    Created,
    /// The singleton existed; its login name and password were replaced.
    Updated,
}

/// Owns the stored credentials of the singleton user.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    users: UserRepository,
    hasher: PasswordHasher,
}

impl CredentialStore {
    /// Creates a new credential store.
    pub fn new(users: UserRepository, hasher: PasswordHasher) -> Self {
        Self { users, hasher }
    }

    /// The singleton account, if one has been bootstrapped.
    pub async fn owner(&self) -> AppResult<Option<User>> {
        self.users.find_singleton().await
    }

    /// Looks up an account by id.
    pub async fn find_user(&self, id: UserId) -> AppResult<Option<User>> {
        self.users.find_by_id(id).await
    }

    /// Replaces the stored password hash of the singleton.
    pub async fn set_password(&self, raw: &str) -> AppResult<()> {
        let hash = self.hash(raw).await?;
        if !self.users.update_password(User::SINGLETON_ID, &hash).await? {
            return Err(AppError::not_found("No user account has been created"));
        }
        info!("Password updated");
        Ok(())
    }

    /// Checks `raw` against the stored hash. `false` when no account exists.
    pub async fn verify_password(&self, raw: &str) -> AppResult<bool> {
        match self.owner().await? {
            Some(user) => self.verify(raw, &user.password_hash).await,
            None => Ok(false),
        }
    }

    /// Resolves a username/password pair to the singleton account.
    ///
    /// The username is matched exactly. The password is verified whether or
    /// not the username matched, so both failures take comparable time.
    pub async fn authenticate(&self, username: &str, password: &str) -> AppResult<User> {
        let Some(user) = self.owner().await? else {
            // Burn one hash so a missing account is not distinguishable by timing.
            self.hash(password).await?;
            warn!("Login attempted before any account exists");
            return Err(AuthError::InvalidCredential.into());
        };

        let password_ok = self.verify(password, &user.password_hash).await?;
        if user.username != username || !password_ok {
            warn!("Login rejected: invalid credentials");
            return Err(AuthError::InvalidCredential.into());
        }

        Ok(user)
    }

    /// Creates the singleton, or resets its login name and password.
    pub async fn bootstrap_admin(&self, username: &str, password: &str) -> AppResult<AdminBootstrap> {
        match self.owner().await? {
            Some(user) => {
                let hash = self.hash(password).await?;
                self.users.update_credentials(user.id, username, &hash).await?;
                info!(username = %username, "Admin account updated");
                Ok(AdminBootstrap::Updated)
            }
            None => {
                let account = self.new_account(username, password).await?;
                self.users.create(&account).await?;
                info!(username = %username, "Admin account created");
                Ok(AdminBootstrap::Created)
            }
        }
    }

    /// A not yet persisted singleton row with a hashed `password`.
    pub async fn new_account(&self, username: &str, password: &str) -> AppResult<NewUser> {
        Ok(NewUser {
            name: DEFAULT_ADMIN_NAME.to_string(),
            username: username.to_string(),
            password_hash: self.hash(password).await?,
        })
    }

    /// Sets the display name of an account. The name must already be valid.
    pub async fn update_display_name(&self, id: UserId, name: &str) -> AppResult<()> {
        if !self.users.update_name(id, name).await? {
            return Err(AppError::not_found(format!("User {id} not found")));
        }
        Ok(())
    }

    async fn hash(&self, raw: &str) -> AppResult<String> {
        let hasher = self.hasher.clone();
        let raw = raw.to_string();
        tokio::task::spawn_blocking(move || hasher.hash_password(&raw))
            .await
            .map_err(|e| AppError::internal(format!("Hashing task failed: {e}")))?
    }

    async fn verify(&self, raw: &str, hash: &str) -> AppResult<bool> {
        let hasher = self.hasher.clone();
        let raw = raw.to_string();
        let hash = hash.to_string();
        tokio::task::spawn_blocking(move || hasher.verify_password(&raw, &hash))
            .await
            .map_err(|e| AppError::internal(format!("Verification task failed: {e}")))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use watchlist_core::config::{AuthConfig, DatabaseConfig};
    use watchlist_database::DatabasePool;
    use watchlist_database::migration::run_migrations;

    async fn store() -> CredentialStore {
        store_with_db().await.0
    }

    async fn store_with_db() -> (CredentialStore, DatabasePool) {
        let db = DatabasePool::connect(&DatabaseConfig::in_memory())
            .await
            .expect("connect");
        run_migrations(db.pool()).await.expect("migrate");
        let hasher = PasswordHasher::new(&AuthConfig::low_cost()).expect("hasher");
        let store = CredentialStore::new(UserRepository::new(db.pool().clone()), hasher);
        (store, db)
    }

    #[tokio::test]
    async fn test_bootstrap_creates_then_updates() {
        let store = store().await;

        let first = store.bootstrap_admin("test", "123").await.expect("create");
        assert_eq!(first, AdminBootstrap::Created);
        let owner = store.owner().await.expect("owner").expect("present");
        assert_eq!(owner.name, DEFAULT_ADMIN_NAME);
        assert_eq!(owner.username, "test");
        assert_ne!(owner.password_hash, "123");

        let second = store.bootstrap_admin("peter", "456").await.expect("update");
        assert_eq!(second, AdminBootstrap::Updated);
        let owner = store.owner().await.expect("owner").expect("present");
        assert_eq!(owner.username, "peter");
        assert_eq!(owner.name, DEFAULT_ADMIN_NAME);
        assert!(store.verify_password("456").await.expect("verify"));
        assert!(!store.verify_password("123").await.expect("verify"));
    }

    #[tokio::test]
    async fn test_authenticate() {
        let store = store().await;
        store.bootstrap_admin("test", "123").await.expect("bootstrap");

        let user = store.authenticate("test", "123").await.expect("login");
        assert_eq!(user.id, User::SINGLETON_ID);

        for (username, password) in [("wrong", "123"), ("test", "456"), ("Test", "123")] {
            let err = store.authenticate(username, password).await.unwrap_err();
            assert_eq!(err.auth_error(), Some(AuthError::InvalidCredential));
        }
    }

    #[tokio::test]
    async fn test_authenticate_without_account() {
        let store = store().await;
        let err = store.authenticate("test", "123").await.unwrap_err();
        assert_eq!(err.auth_error(), Some(AuthError::InvalidCredential));
        assert!(!store.verify_password("123").await.expect("verify"));
    }

    #[tokio::test]
    async fn test_set_password() {
        let store = store().await;
        assert!(store.set_password("123").await.unwrap_err().is_not_found());

        store.bootstrap_admin("test", "123").await.expect("bootstrap");
        store.set_password("new-secret").await.expect("set");
        assert!(store.verify_password("new-secret").await.expect("verify"));
        assert!(store.authenticate("test", "123").await.is_err());
    }

    #[tokio::test]
    async fn test_update_display_name() {
        let store = store().await;
        store.bootstrap_admin("test", "123").await.expect("bootstrap");

        store
            .update_display_name(User::SINGLETON_ID, "Grey Li")
            .await
            .expect("update");
        let owner = store.owner().await.expect("owner").expect("present");
        assert_eq!(owner.name, "Grey Li");
    }

    #[tokio::test]
    async fn test_failed_reset_keeps_old_login() {
        let (store, db) = store_with_db().await;
        store.bootstrap_admin("test", "123").await.expect("bootstrap");

        sqlx::query(
            "CREATE TRIGGER reject_password BEFORE UPDATE OF password_hash ON users \
             BEGIN SELECT RAISE(ABORT, 'password locked'); END",
        )
        .execute(db.pool())
        .await
        .expect("trigger");

        assert!(store.bootstrap_admin("peter", "456").await.is_err());

        let owner = store.owner().await.expect("owner").expect("present");
        assert_eq!(owner.username, "test");
        assert!(store.authenticate("test", "123").await.is_ok());
    }

    #[tokio::test]
    async fn test_new_account_is_hashed_and_not_persisted() {
        let store = store().await;
        let account = store.new_account("admin", "secret").await.expect("account");

        assert_eq!(account.name, DEFAULT_ADMIN_NAME);
        assert_eq!(account.username, "admin");
        assert_ne!(account.password_hash, "secret");
        assert!(store.owner().await.expect("owner").is_none());
    }
}
