//! Route handlers.

pub mod auth;
pub mod catalog;
pub mod fallback;
pub mod health;
pub mod settings;

use watchlist_auth::SessionContext;
use watchlist_core::result::AppResult;

use crate::dto::response::PageContext;
use crate::state::AppState;

/// Owner name, login flag and drained flashes for a view.
pub(crate) async fn page_context(state: &AppState, ctx: &SessionContext) -> AppResult<PageContext> {
    let owner_name = state.users.owner().await?.map(|user| user.name);
    let flashes = state.sessions.take_flashes(&ctx.token).await;
    Ok(PageContext {
        owner_name,
        authenticated: ctx.is_authenticated(),
        flashes,
    })
}
