//! One-shot messages carried across a redirect.
//!
//! Handlers attach a [`Flash`] (and, after login, an [`IssuedSession`]) to
//! the response; the session middleware moves them into the session store
//! and the cookie before the response leaves the server.

use std::convert::Infallible;

use axum::response::{IntoResponse, IntoResponseParts, Redirect, Response, ResponseParts};

use watchlist_auth::SessionToken;

pub const ITEM_CREATED: &str = "Item created.";
pub const ITEM_UPDATED: &str = "Item updated.";
pub const ITEM_DELETED: &str = "Item Deleted.";
pub const INVALID_INPUT: &str = "Invalid input.";
pub const LOGIN_SUCCESS: &str = "Login success.";
pub const INVALID_CREDENTIALS: &str = "Invalid username or password.";
pub const GOODBYE: &str = "Goodbye.";
pub const SETTINGS_UPDATED: &str = "Settings updated.";
pub const LOGIN_REQUIRED: &str = "Please log in to access this page.";

/// A message queued for the next view of this client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flash(pub String);

impl Flash {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

impl IntoResponseParts for Flash {
    type Error = Infallible;

    fn into_response_parts(self, mut res: ResponseParts) -> Result<ResponseParts, Self::Error> {
        res.extensions_mut().insert(self);
        Ok(res)
    }
}

/// A session token minted during the request that replaces the client's.
#[derive(Debug, Clone)]
pub struct IssuedSession(pub SessionToken);

impl IntoResponseParts for IssuedSession {
    type Error = Infallible;

    fn into_response_parts(self, mut res: ResponseParts) -> Result<ResponseParts, Self::Error> {
        res.extensions_mut().insert(self);
        Ok(res)
    }
}

/// Flash `message` and redirect to `to`.
pub fn flash_redirect(message: &str, to: &str) -> Response {
    (Flash::new(message), Redirect::to(to)).into_response()
}
