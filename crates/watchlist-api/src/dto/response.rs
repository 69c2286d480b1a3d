//! View models returned by the GET routes.

use serde::{Deserialize, Serialize};

use watchlist_entity::movie::Movie;

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Fields shared by every page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageContext {
    /// Display name of the watchlist owner.
    pub owner_name: Option<String>,
    /// Whether the caller is logged in.
    pub authenticated: bool,
    /// Flash messages drained for this view.
    pub flashes: Vec<String>,
}

/// `GET /`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexView {
    #[serde(flatten)]
    pub page: PageContext,
    pub movies: Vec<Movie>,
}

/// `GET /movie/edit/{id}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditView {
    #[serde(flatten)]
    pub page: PageContext,
    pub movie: Movie,
}

/// `GET /login`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginView {
    #[serde(flatten)]
    pub page: PageContext,
}

/// `GET /settings`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettingsView {
    #[serde(flatten)]
    pub page: PageContext,
    /// Current display name, prefilled in the form.
    pub name: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub database: String,
    pub uptime_seconds: i64,
    pub active_sessions: u64,
}
