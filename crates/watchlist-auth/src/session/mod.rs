//! Server-side sessions.

pub mod context;
pub mod manager;
pub mod store;
pub mod token;

pub use context::{SessionContext, SessionState};
pub use manager::SessionManager;
pub use store::{SessionRecord, SessionStore};
pub use token::SessionToken;
