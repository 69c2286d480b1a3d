//! Session management configuration.

use serde::{Deserialize, Serialize};

/// Session cookie and expiry configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Name of the cookie carrying the session token.
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
    /// Whether the cookie is flagged `Secure` (HTTPS only).
    #[serde(default)]
    pub secure_cookie: bool,
    /// Idle timeout in minutes before a session is discarded.
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_minutes: u64,
    /// Upper bound on concurrently tracked sessions.
    #[serde(default = "default_max_sessions")]
    pub max_sessions: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: default_cookie_name(),
            secure_cookie: false,
            idle_timeout_minutes: default_idle_timeout(),
            max_sessions: default_max_sessions(),
        }
    }
}

fn default_cookie_name() -> String {
    "watchlist_session".to_string()
}

fn default_idle_timeout() -> u64 {
    60 * 24
}

fn default_max_sessions() -> u64 {
    10_000
}
