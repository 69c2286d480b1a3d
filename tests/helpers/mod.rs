//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::sync::Mutex;

use axum::Router;
use axum::body::Body;
use http::header::{CONTENT_TYPE, COOKIE, LOCATION, SET_COOKIE};
use http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use watchlist_api::{AppState, build_app};
use watchlist_auth::{CredentialStore, PasswordHasher};
use watchlist_core::config::{AppConfig, AuthConfig, DatabaseConfig};
use watchlist_database::DatabasePool;
use watchlist_database::migration::run_migrations;
use watchlist_database::repositories::{MovieRepository, UserRepository};
use watchlist_entity::movie::MovieFields;
use watchlist_entity::user::User;
use watchlist_service::AdminService;

/// Test application over a private in-memory database, seeded with the
/// account `test`/`123` (display name `Test`) and one movie.
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Database pool for direct queries
    pub db: DatabasePool,
    /// Session cookie (`name=value`) remembered between requests
    cookie: Mutex<Option<String>>,
}

/// Captured response
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub location: Option<String>,
    pub set_cookie: Option<String>,
    pub body: Value,
}

impl TestResponse {
    /// `data.flashes` of a view.
    pub fn flashes(&self) -> Vec<String> {
        self.body["data"]["flashes"]
            .as_array()
            .map(|items| {
                items
                    .iter()
                    .filter_map(|v| v.as_str().map(String::from))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Titles in `data.movies` of the index view.
    pub fn movie_titles(&self) -> Vec<String> {
        self.body["data"]["movies"]
            .as_array()
            .map(|items| {
                items
                    .iter()
                    .filter_map(|m| m["title"].as_str().map(String::from))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn authenticated(&self) -> bool {
        self.body["data"]["authenticated"].as_bool().unwrap_or(false)
    }
}

/// Test configuration: in-memory database and the cheapest Argon2 cost.
pub fn test_config() -> AppConfig {
    AppConfig {
        database: DatabaseConfig::in_memory(),
        auth: AuthConfig::low_cost(),
        ..AppConfig::default()
    }
}

/// Bootstrap service over `db` with test hashing cost.
pub fn admin_service(db: &DatabasePool) -> AdminService {
    AdminService::new(db.pool().clone(), credential_store(db))
}

pub fn credential_store(db: &DatabasePool) -> CredentialStore {
    let hasher = PasswordHasher::new(&AuthConfig::low_cost()).expect("hasher");
    CredentialStore::new(UserRepository::new(db.pool().clone()), hasher)
}

impl TestApp {
    /// Create a new seeded test application
    pub async fn new() -> Self {
        let config = test_config();
        let db = DatabasePool::connect(&config.database)
            .await
            .expect("Failed to connect to test database");
        run_migrations(db.pool())
            .await
            .expect("Failed to run migrations");

        let credentials = credential_store(&db);
        credentials
            .bootstrap_admin("test", "123")
            .await
            .expect("Failed to create test user");
        credentials
            .update_display_name(User::SINGLETON_ID, "Test")
            .await
            .expect("Failed to name test user");
        MovieRepository::new(db.pool().clone())
            .create(&MovieFields::new("Test Movie Title", "2022"))
            .await
            .expect("Failed to create test movie");

        let state = AppState::new(config, db.clone()).expect("Failed to build state");
        Self {
            router: build_app(state),
            db,
            cookie: Mutex::new(None),
        }
    }

    /// Send a request, carrying and updating the session cookie.
    pub async fn request(&self, method: &str, uri: &str, form: Option<&[(&str, &str)]>) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);

        if let Some(cookie) = self.cookie.lock().expect("cookie lock").clone() {
            builder = builder.header(COOKIE, cookie);
        }

        let body = match form {
            Some(fields) => {
                builder = builder.header(CONTENT_TYPE, "application/x-www-form-urlencoded");
                Body::from(encode_form(fields))
            }
            None => Body::empty(),
        };

        let response = self
            .router
            .clone()
            .oneshot(builder.body(body).expect("request"))
            .await
            .expect("Failed to execute request");

        let status = response.status();
        let location = response
            .headers()
            .get(LOCATION)
            .and_then(|v| v.to_str().ok())
            .map(String::from);
        let set_cookie = response
            .headers()
            .get(SET_COOKIE)
            .and_then(|v| v.to_str().ok())
            .map(String::from);

        if let Some(ref header) = set_cookie {
            let pair = header.split(';').next().unwrap_or_default().to_string();
            *self.cookie.lock().expect("cookie lock") = Some(pair);
        }

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read body");
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            location,
            set_cookie,
            body,
        }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.request("GET", uri, None).await
    }

    pub async fn post(&self, uri: &str, form: &[(&str, &str)]) -> TestResponse {
        self.request("POST", uri, Some(form)).await
    }

    /// Follow a redirect response with a GET.
    pub async fn follow(&self, response: TestResponse) -> TestResponse {
        assert_eq!(response.status, StatusCode::SEE_OTHER, "expected a redirect");
        let location = response.location.expect("redirect without Location");
        self.get(&location).await
    }

    /// POST and follow the redirect.
    pub async fn post_follow(&self, uri: &str, form: &[(&str, &str)]) -> TestResponse {
        let response = self.post(uri, form).await;
        self.follow(response).await
    }

    /// GET and follow the redirect.
    pub async fn get_follow(&self, uri: &str) -> TestResponse {
        let response = self.get(uri).await;
        self.follow(response).await
    }

    /// Log in as the seeded account.
    pub async fn login(&self) -> TestResponse {
        self.post_follow("/login", &[("username", "test"), ("password", "123")])
            .await
    }

    /// Replace the remembered cookie pair.
    pub fn set_cookie(&self, pair: &str) {
        *self.cookie.lock().expect("cookie lock") = Some(pair.to_string());
    }

    /// The current session cookie pair.
    pub fn cookie(&self) -> Option<String> {
        self.cookie.lock().expect("cookie lock").clone()
    }
}

fn encode_form(fields: &[(&str, &str)]) -> String {
    url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(fields)
        .finish()
}
