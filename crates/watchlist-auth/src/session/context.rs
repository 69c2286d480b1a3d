//! Per-request view of the caller's session.

use serde::Serialize;

use watchlist_core::types::UserId;

use super::token::SessionToken;

/// Authentication state of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "state", content = "user_id", rename_all = "snake_case")]
pub enum SessionState {
    /// No successful login on this session.
    #[default]
    Anonymous,
    /// Logged in as the given user.
    Authenticated(UserId),
}

impl SessionState {
    /// The bound user, if authenticated.
    pub fn user_id(&self) -> Option<UserId> {
        match self {
            Self::Anonymous => None,
            Self::Authenticated(id) => Some(*id),
        }
    }

    /// Whether a user is bound.
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }
}

/// The session a request runs under, handed explicitly to every operation.
#[derive(Debug, Clone)]
pub struct SessionContext {
    /// Token identifying the server-side record.
    pub token: SessionToken,
    /// State at the time the request was resolved.
    pub state: SessionState,
}

impl SessionContext {
    /// A context for an unauthenticated caller.
    pub fn anonymous(token: SessionToken) -> Self {
        Self {
            token,
            state: SessionState::Anonymous,
        }
    }

    /// A context bound to `user_id`.
    pub fn authenticated(token: SessionToken, user_id: UserId) -> Self {
        Self {
            token,
            state: SessionState::Authenticated(user_id),
        }
    }

    /// The bound user, if authenticated.
    pub fn user_id(&self) -> Option<UserId> {
        self.state.user_id()
    }

    /// Whether a user is bound.
    pub fn is_authenticated(&self) -> bool {
        self.state.is_authenticated()
    }
}
