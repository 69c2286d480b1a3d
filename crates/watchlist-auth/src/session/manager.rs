//! Login and logout over server-side sessions.

use tracing::info;

use watchlist_core::error::AuthError;
use watchlist_core::result::AppResult;
use watchlist_entity::user::User;

use crate::credential::CredentialStore;

use super::context::{SessionContext, SessionState};
use super::store::SessionStore;
use super::token::SessionToken;

/// Drives a session between the anonymous and authenticated states.
#[derive(Debug, Clone)]
pub struct SessionManager {
    store: SessionStore,
    credentials: CredentialStore,
}

impl SessionManager {
    /// Creates a new session manager.
    pub fn new(store: SessionStore, credentials: CredentialStore) -> Self {
        Self { store, credentials }
    }

    /// The underlying record store.
    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    /// Loads the session behind a presented token, or starts an anonymous one.
    ///
    /// A started session is not stored until something is written to it
    /// (a flash or a login). The flag is `true` for such a fresh session;
    /// once it has been written the caller must hand its token to the client.
    pub async fn resolve(&self, presented: Option<&str>) -> (SessionContext, bool) {
        if let Some(token) = presented.and_then(SessionToken::parse) {
            if let Some(record) = self.store.get(&token).await {
                return (
                    SessionContext {
                        token,
                        state: record.state,
                    },
                    false,
                );
            }
        }

        (SessionContext::anonymous(SessionToken::generate()), true)
    }

    /// Authenticates the caller and binds the session to the user.
    ///
    /// On success the presented session is replaced by one under a new
    /// token, which is returned; queued flashes move across. On failure the
    /// session is left untouched.
    pub async fn login(
        &self,
        ctx: &SessionContext,
        username: &str,
        password: &str,
    ) -> AppResult<SessionToken> {
        if username.trim().is_empty() || password.trim().is_empty() {
            return Err(AuthError::EmptyCredential.into());
        }

        let user: User = self.credentials.authenticate(username, password).await?;

        let flashes = self
            .store
            .discard(&ctx.token)
            .await
            .map(|record| record.flashes)
            .unwrap_or_default();
        let (token, _) = self
            .store
            .open_with(SessionState::Authenticated(user.id), flashes)
            .await;

        info!(user_id = %user.id, "Login succeeded");
        Ok(token)
    }

    /// Returns the session to the anonymous state. A no-op when the session
    /// is already anonymous or unknown.
    pub async fn logout(&self, ctx: &SessionContext) {
        let Some(mut record) = self.store.get(&ctx.token).await else {
            return;
        };
        if let SessionState::Authenticated(user_id) = record.state {
            record.state = SessionState::Anonymous;
            self.store.save(&ctx.token, record).await;
            info!(user_id = %user_id, "Logged out");
        }
    }

    /// Queues a one-shot message for the next view.
    pub async fn push_flash(&self, token: &SessionToken, message: impl Into<String>) {
        self.store.push_flash(token, message).await;
    }

    /// Drains the queued messages.
    pub async fn take_flashes(&self, token: &SessionToken) -> Vec<String> {
        self.store.take_flashes(token).await
    }
}
