//! # watchlist-auth
//!
//! Authentication and authorization for the Watchlist.
//!
//! ## Modules
//!
//! - `password`: Argon2id password hashing and verification
//! - `credential`: the credential store backing the singleton user
//! - `session`: server-side sessions, login and logout
//! - `guard`: the session check in front of every mutating operation

pub mod credential;
pub mod guard;
pub mod password;
pub mod session;

pub use credential::{AdminBootstrap, CredentialStore};
pub use guard::require_session;
pub use password::PasswordHasher;
pub use session::{SessionContext, SessionManager, SessionState, SessionStore, SessionToken};
