//! User entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use watchlist_core::types::UserId;

/// The one administrative account of the watchlist.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Identifier (always the singleton id).
    pub id: UserId,
    /// Display name shown as the watchlist owner.
    pub name: String,
    /// Login name, compared case-sensitively.
    pub username: String,
    /// Argon2id PHC string.
    #[serde(skip_serializing)]
    pub password_hash: String,
}

impl User {
    /// Primary key of the only row the `users` table may hold.
    pub const SINGLETON_ID: UserId = UserId(1);
}

/// Data required to create the singleton user.
#[derive(Debug, Clone)]
pub struct NewUser {
    /// Display name.
    pub name: String,
    /// Login name.
    pub username: String,
    /// Pre-hashed password.
    pub password_hash: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_hash_is_not_serialized() {
        let user = User {
            id: User::SINGLETON_ID,
            name: "Test".to_string(),
            username: "test".to_string(),
            password_hash: "$argon2id$secret".to_string(),
        };
        let json = serde_json::to_string(&user).expect("serialize");
        assert!(!json.contains("argon2id"));
        assert!(json.contains("\"username\":\"test\""));
    }
}
