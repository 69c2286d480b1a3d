//! Session cookie middleware.
//!
//! Resolves the caller's server-side session before the handler runs and
//! exposes it as a [`SessionContext`] request extension. Afterwards it
//! stores any [`Flash`] the handler produced and sets the cookie when a
//! fresh session got its first record or the session was replaced at login.
//! Requests that never write to their session leave nothing behind.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

use watchlist_auth::{SessionContext, SessionToken};

use crate::flash::{Flash, IssuedSession};
use crate::state::AppState;

pub async fn session_layer(State(state): State<AppState>, mut request: Request, next: Next) -> Response {
    let cookie_name = state.config.session.cookie_name.as_str();
    let jar = CookieJar::from_headers(request.headers());
    let presented = jar.get(cookie_name).map(|c| c.value().to_string());

    let (ctx, fresh) = state.sessions.resolve(presented.as_deref()).await;
    let current: SessionToken = ctx.token.clone();
    request.extensions_mut().insert::<SessionContext>(ctx);

    let mut response = next.run(request).await;

    let issued = response.extensions_mut().remove::<IssuedSession>();
    let rotated = issued.is_some();
    let token = issued.map(|IssuedSession(token)| token).unwrap_or(current);

    if let Some(Flash(message)) = response.extensions_mut().remove::<Flash>() {
        state.sessions.push_flash(&token, message).await;
    }

    let persisted = fresh && !rotated && state.sessions.store().get(&token).await.is_some();
    if rotated || persisted {
        let cookie = session_cookie(&state, &token);
        return (CookieJar::new().add(cookie), response).into_response();
    }
    response
}

fn session_cookie(state: &AppState, token: &SessionToken) -> Cookie<'static> {
    let config = &state.config.session;
    Cookie::build((config.cookie_name.clone(), token.as_str().to_string()))
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(config.secure_cookie)
        .path("/")
        .build()
}
