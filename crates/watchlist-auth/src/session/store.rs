//! In-memory session records backed by a moka cache.

use std::time::Duration;

use moka::future::Cache;
use tracing::debug;

use watchlist_core::config::SessionConfig;

use super::context::SessionState;
use super::token::SessionToken;

/// Everything the server remembers about one client session.
#[derive(Debug, Clone)]
pub struct SessionRecord {
    /// Anonymous or bound to a user.
    pub state: SessionState,
    /// Messages queued for the next view.
    pub flashes: Vec<String>,
}

impl SessionRecord {
    fn new(state: SessionState) -> Self {
        Self {
            state,
            flashes: Vec::new(),
        }
    }
}

/// Token-keyed session records with idle expiry.
///
/// Read-modify-write sequences are not atomic; concurrent writers to the
/// same session resolve as last write wins.
#[derive(Debug, Clone)]
pub struct SessionStore {
    cache: Cache<SessionToken, SessionRecord>,
}

impl SessionStore {
    /// Creates a store from configuration.
    pub fn new(config: &SessionConfig) -> Self {
        let cache = Cache::builder()
            .max_capacity(config.max_sessions)
            .time_to_idle(Duration::from_secs(config.idle_timeout_minutes * 60))
            .build();
        Self { cache }
    }

    /// Opens a fresh session in `state`, pre-seeded with `flashes`.
    pub async fn open_with(
        &self,
        state: SessionState,
        flashes: Vec<String>,
    ) -> (SessionToken, SessionRecord) {
        let token = SessionToken::generate();
        let mut record = SessionRecord::new(state);
        record.flashes = flashes;
        self.cache.insert(token.clone(), record.clone()).await;
        debug!(token = ?token, "Session opened");
        (token, record)
    }

    /// Fetches a live session.
    pub async fn get(&self, token: &SessionToken) -> Option<SessionRecord> {
        self.cache.get(token).await
    }

    /// Writes a session record back.
    pub async fn save(&self, token: &SessionToken, record: SessionRecord) {
        self.cache.insert(token.clone(), record).await;
    }

    /// Drops a session.
    pub async fn discard(&self, token: &SessionToken) -> Option<SessionRecord> {
        let removed = self.cache.remove(token).await;
        if removed.is_some() {
            debug!(token = ?token, "Session discarded");
        }
        removed
    }

    /// Queues a flash message. A record that already expired is reopened
    /// under the same token as anonymous.
    pub async fn push_flash(&self, token: &SessionToken, message: impl Into<String>) {
        let mut record = self
            .get(token)
            .await
            .unwrap_or_else(|| SessionRecord::new(SessionState::Anonymous));
        record.flashes.push(message.into());
        self.save(token, record).await;
    }

    /// Drains the queued flash messages.
    pub async fn take_flashes(&self, token: &SessionToken) -> Vec<String> {
        let Some(mut record) = self.get(token).await else {
            return Vec::new();
        };
        if record.flashes.is_empty() {
            return Vec::new();
        }
        let flashes = std::mem::take(&mut record.flashes);
        self.save(token, record).await;
        flashes
    }

    /// Number of live sessions, after applying pending evictions.
    pub async fn active_count(&self) -> u64 {
        self.cache.run_pending_tasks().await;
        self.cache.entry_count()
    }
}
