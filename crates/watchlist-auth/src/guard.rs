//! Authorization guard for mutating operations.

use watchlist_core::error::AuthError;
use watchlist_core::types::UserId;

use crate::session::SessionContext;

/// Admits the caller only when the session is bound to a user.
pub fn require_session(ctx: &SessionContext) -> Result<UserId, AuthError> {
    ctx.user_id().ok_or(AuthError::Unauthenticated)
}
