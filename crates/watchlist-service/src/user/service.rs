//! Owner lookups and the settings page.

use tracing::info;

use watchlist_auth::{CredentialStore, SessionContext, require_session};
use watchlist_core::result::AppResult;
use watchlist_entity::user::User;

use crate::validation::EntryValidator;

/// Reads the owner account and applies settings changes.
#[derive(Debug, Clone)]
pub struct UserService {
    /// Credential store.
    credentials: CredentialStore,
    /// Field rules.
    validator: EntryValidator,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(credentials: CredentialStore, validator: EntryValidator) -> Self {
        Self {
            credentials,
            validator,
        }
    }

    /// The singleton account, shown as the watchlist owner on every view.
    pub async fn owner(&self) -> AppResult<Option<User>> {
        self.credentials.owner().await
    }

    /// The account bound to the session, if any.
    pub async fn current(&self, ctx: &SessionContext) -> AppResult<Option<User>> {
        match ctx.user_id() {
            Some(id) => self.credentials.find_user(id).await,
            None => Ok(None),
        }
    }

    /// Changes the display name of the logged-in account.
    pub async fn update_settings(&self, ctx: &SessionContext, name: &str) -> AppResult<()> {
        let user_id = require_session(ctx)?;
        self.validator.validate_display_name(name)?;

        self.credentials.update_display_name(user_id, name).await?;
        info!(user_id = %user_id, "Settings updated");
        Ok(())
    }
}
