//! Form payloads, one per operation.
//!
//! Missing fields decode as empty strings so they reach the validator
//! instead of failing extraction.

use serde::{Deserialize, Serialize};

use watchlist_entity::movie::MovieFields;

/// Body of `POST /` and `POST /movie/edit/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MovieForm {
    pub title: String,
    pub year: String,
}

impl From<MovieForm> for MovieFields {
    fn from(form: MovieForm) -> Self {
        MovieFields::new(form.title, form.year)
    }
}

/// Body of `POST /login`.
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for LoginForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginForm")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Body of `POST /settings`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsForm {
    pub name: String,
}
